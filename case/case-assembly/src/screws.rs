//! Fastener solids: screw-insert bosses and bores.

use case_transform::Chain;
use nalgebra::Point3;
use scad_solid::Solid;

/// Wall thickness of the boss around a heat-set insert.
const BOSS_WALL: f64 = 3.0;

/// Extra bore length so the hole always cuts clear through.
const BORE_OVERSHOOT: f64 = 12.0;

const BOSS_SEGMENTS: u32 = 30;
const BORE_SEGMENTS: u32 = 40;

/// Dimensions of one screw joint: a heat-set insert in the case, a
/// clearance bore through the bottom plate.
#[derive(Debug, Clone, Copy)]
pub struct ScrewSpec {
    /// Boss height above the ground plane, in mm.
    pub height: f64,
    /// Screw thread clearance radius, in mm.
    pub thread_radius: f64,
    /// Heat-set insert clearance radius, in mm.
    pub insert_radius: f64,
}

impl Default for ScrewSpec {
    /// M3 screws with 4.3 mm heat-set inserts.
    fn default() -> Self {
        Self {
            height: 8.0,
            thread_radius: 3.5 / 2.0,
            insert_radius: 4.3 / 2.0,
        }
    }
}

impl ScrewSpec {
    /// The boss unioned into the case, seated on the ground plane.
    #[must_use]
    pub fn insert_boss(&self) -> Solid {
        Solid::cylinder(self.height, self.insert_radius + BOSS_WALL, BOSS_SEGMENTS)
            .translate_z(self.height / 2.0)
    }

    /// The insert-clearance bore subtracted from the case.
    #[must_use]
    pub fn insert_bore(&self) -> Solid {
        Solid::cylinder(self.height + BORE_OVERSHOOT, self.insert_radius, BORE_SEGMENTS)
    }

    /// The thread-clearance bore subtracted from the bottom plate.
    #[must_use]
    pub fn screw_bore(&self) -> Solid {
        Solid::cylinder(self.height + BORE_OVERSHOOT, self.thread_radius, BORE_SEGMENTS)
    }
}

/// The world point of a screw anchor derived from a key corner.
///
/// Evaluates the corner in world space first, then forces Z to the ground
/// plane and applies the hand-tuned nudge. Flattening after evaluation
/// keeps the anchor under the corner regardless of the key's rotation.
#[must_use]
pub fn flattened_anchor(corner: &Chain, dx: f64, dy: f64) -> Point3<f64> {
    let mut p = corner.apply_point(Point3::origin());
    p.z = 0.0;
    p.x += dx;
    p.y += dy;
    p
}
