//! The assembly pipeline proper.

use case_layout::KeyLayout;
use case_wall::{synthesize_wall, WallAnchor};
use nalgebra::Point3;
use scad_solid::{hull_all, union_all, Solid};
use tracing::{debug, info};

use crate::error::AssemblyResult;
use crate::screws::ScrewSpec;

/// Parameters of one assembly run.
#[derive(Debug, Clone, Copy)]
pub struct CaseParams {
    /// Include keycap solids in the case output (preview aid).
    pub include_caps: bool,
    /// Bottom plate thickness, in mm.
    pub plate_thickness: f64,
    /// Screw joint dimensions.
    pub screws: ScrewSpec,
}

impl Default for CaseParams {
    fn default() -> Self {
        Self {
            include_caps: false,
            plate_thickness: 1.5,
            screws: ScrewSpec::default(),
        }
    }
}

/// The two derived output solids.
#[derive(Debug, Clone)]
pub struct CaseSolids {
    /// The mirrored case shell.
    pub case_shell: Solid,
    /// The mirrored flat bottom plate.
    pub bottom_plate: Solid,
}

/// Run the full pipeline: keys + wall + bosses, minus bores, mirrored,
/// plus the projected bottom plate.
///
/// `screw_points` are ground-plane anchor points (see
/// [`crate::flattened_anchor`]); one boss and one bore of each kind is
/// placed at every point.
///
/// # Errors
///
/// Propagates wall-synthesis failures ([`crate::AssemblyError::Wall`]).
pub fn assemble(
    layout: &KeyLayout,
    anchors: &[WallAnchor],
    screw_points: &[Point3<f64>],
    params: &CaseParams,
) -> AssemblyResult<CaseSolids> {
    info!(
        "assembling case from {} keys, {} wall anchors, {} screws",
        layout.all_keys().len(),
        anchors.len(),
        screw_points.len()
    );

    let mut shapes = Vec::new();
    for key in layout.all_keys() {
        shapes.push(key.switch_solid());
        if params.include_caps {
            shapes.push(key.cap_solid().color("red"));
        }
    }

    shapes.extend(synthesize_wall(anchors)?);

    let at_points = |solid: &Solid| {
        union_all(
            screw_points
                .iter()
                .map(|p| solid.translate(p.x, p.y, p.z)),
        )
    };
    shapes.push(at_points(&params.screws.insert_boss()));
    debug!("case union has {} shapes", shapes.len());

    // Subtracting before mirroring keeps both derivations on the same body.
    let body = union_all(shapes).subtract(&at_points(&params.screws.insert_bore()));
    let case_shell = body.mirror_x();

    // The plate silhouette needs the filled key footprints, not the open
    // switch cutouts, so each housing contributes its hull.
    let mut plate_shapes = vec![body];
    for key in layout.all_keys() {
        plate_shapes.push(hull_all([key.switch_solid()]));
    }
    let bottom_plate = union_all(plate_shapes)
        .projection()
        .linear_extrude(params.plate_thickness)
        .subtract(&at_points(&params.screws.screw_bore()))
        .mirror_x();

    Ok(CaseSolids {
        case_shell,
        bottom_plate,
    })
}
