//! Assembly pipeline: keys + wall + fasteners into the final case solids.
//!
//! The pipeline unions every key's switch housing with the synthesized
//! wall shell and the screw-insert bosses, subtracts the insert bores,
//! mirrors the result for the opposite hand, and derives a flat bottom
//! plate by projecting the case and extruding it back up.
//!
//! The crate also carries the one concrete design this workspace exists
//! for: the six-key macropad, with its anchor ring and screw positions,
//! under [`macropad_solids`].
//!
//! # Example
//!
//! ```
//! let solids = case_assembly::macropad_solids().unwrap();
//! assert!(solids.case_shell.to_scad().starts_with("mirror"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod design;
mod error;
mod export;
mod pipeline;
mod screws;

pub use design::{macropad_solids, macropad_solids_with};
pub use error::{AssemblyError, AssemblyResult};
pub use export::write_case_files;
pub use pipeline::{assemble, CaseParams, CaseSolids};
pub use screws::{flattened_anchor, ScrewSpec};
