//! The concrete macropad design: key trim, wall ring, screw positions.
//!
//! Everything below is positioning data for one physical keyboard half;
//! the case around it is cosmetic and follows from the pipeline.

use case_layout::KeyLayout;
use case_transform::Chain;
use case_wall::{Direction, WallAnchor};
use nalgebra::Point3;

use crate::error::AssemblyResult;
use crate::pipeline::{assemble, CaseParams, CaseSolids};
use crate::screws::flattened_anchor;

/// Build the macropad case with default parameters.
///
/// # Errors
///
/// Propagates layout and wall-synthesis failures.
pub fn macropad_solids() -> AssemblyResult<CaseSolids> {
    macropad_solids_with(&CaseParams::default())
}

/// Build the macropad case with the given parameters.
///
/// # Errors
///
/// Propagates layout and wall-synthesis failures.
pub fn macropad_solids_with(params: &CaseParams) -> AssemblyResult<CaseSolids> {
    let origin = Chain::new().with_translation(-20.0, -40.0, 3.0);
    let mut layout = KeyLayout::new(&origin)?;
    trim_keys(&mut layout);

    let anchors = anchor_ring(&layout);
    let screws = screw_points(&layout);
    assemble(&layout, &anchors, &screws, params)
}

/// Per-key footprint extensions that close the gaps between plates.
fn trim_keys(d: &mut KeyLayout) {
    d.backspace.extra_width_bottom = 12.0;
    d.backspace.extra_width_left = 6.0;
    d.backspace.extra_width_right = 2.0;

    d.delete.extra_width_top = 3.0;
    d.delete.extra_width_right = 20.15;
    d.delete.extra_width_left = 5.0;

    d.ctrl.extra_width_top = 3.0;

    d.alt.extra_width_top = 3.0;
    d.alt.extra_width_right = 6.0;
    d.alt.extra_width_left = 3.0;

    d.end.extra_width_top = 3.0;
    d.end.extra_width_bottom = 3.0;
    d.end.extra_width_right = 13.0;
    d.end.extra_width_left = 12.0;

    d.home.extra_width_left = 6.0;
    d.home.extra_width_right = 1.0;
    d.home.extra_width_top = 3.0;
    d.home.extra_width_bottom = 12.0;
}

/// The wall ring, starting at the top left and walking counter-clockwise.
fn anchor_ring(d: &KeyLayout) -> Vec<WallAnchor> {
    use Direction::{Down, Left, Right, Up};

    let a = |chain: Chain, direction| WallAnchor::new(chain, direction).with_slack(0.0, 0.5);

    vec![
        a(d.home.top_right(), Up),
        a(d.home.top_left(), Up),
        a(d.home.top_left(), Left),
        a(d.home.bottom_left(), Left),
        a(d.backspace.top_left(), Left),
        a(d.backspace.bottom_left(), Left),
        a(d.backspace.bottom_left(), Down),
        a(d.backspace.bottom_right(), Down),
        a(d.end.bottom_left(), Down),
        a(d.end.bottom_right(), Down),
        a(d.end.bottom_right(), Right),
        a(d.end.top_right(), Right),
        a(d.delete.bottom_right(), Right),
        a(d.delete.bottom_right(), Right),
        a(d.alt.bottom_right(), Right),
        a(d.alt.top_right(), Right),
        a(d.alt.top_right(), Up),
        a(d.ctrl.top_right(), Up),
        a(d.ctrl.top_left(), Up),
    ]
}

/// The four screw anchors, nudged into the wall footprint by hand.
fn screw_points(d: &KeyLayout) -> Vec<Point3<f64>> {
    vec![
        flattened_anchor(&d.home.top_left(), 3.0, -3.0),
        flattened_anchor(&d.alt.top_right(), -3.5, -0.5),
        flattened_anchor(&d.backspace.bottom_right(), -19.0, 13.0),
        flattened_anchor(&d.end.bottom_right(), -1.5, 7.0),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn ring_closes_with_nineteen_anchors() {
        let origin = Chain::new();
        let layout = KeyLayout::new(&origin).unwrap();
        assert_eq!(anchor_ring(&layout).len(), 19);
    }

    #[test]
    fn screw_anchors_sit_on_the_ground_plane() {
        let origin = Chain::new().with_translation(-20.0, -40.0, 3.0);
        let layout = KeyLayout::new(&origin).unwrap();
        for p in screw_points(&layout) {
            assert!(p.z.abs() < 1e-12);
        }
    }

    #[test]
    fn macropad_builds_end_to_end() {
        let solids = macropad_solids().unwrap();
        assert!(!solids.case_shell.to_scad().is_empty());
        assert!(!solids.bottom_plate.to_scad().is_empty());
    }
}
