//! Batch entry point: generate the macropad case and bottom plate.
//!
//! Takes no arguments; writes `macropad.scad` and `bottom_macropad.scad`
//! into the working directory and exits 0. Set `RUST_LOG` for pipeline
//! diagnostics.

use std::path::Path;

use case_assembly::{macropad_solids, write_case_files};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("generating..");
    let solids = macropad_solids()?;
    write_case_files(
        &solids,
        Path::new("macropad.scad"),
        Path::new("bottom_macropad.scad"),
    )?;
    Ok(())
}
