//! A single positioned key body.

use case_transform::Chain;
use scad_solid::Solid;

use crate::error::{LayoutError, LayoutResult};

/// Nominal square footprint of one key site, in mm.
///
/// The 19 mm grid spacing leaves a 1 mm gap between neighboring plates.
pub const KEY_FOOTPRINT: f64 = 18.0;

/// Vertical drop from the cap tip (the pose reference) to the switch top.
pub const SWITCH_TOP_DROP: f64 = 10.0;

const SWITCH_CUTOUT: f64 = 14.0;
const PLATE_DEPTH: f64 = 4.0;
const CAP_DEPTH: f64 = 8.0;

/// Which switch-height correction mechanism is active for a key.
///
/// Exactly one mechanism must be active once a layout is finalized: either
/// the key's solids are dropped at generation time (`SwitchDefault`), or the
/// drop has been pushed onto the key's chain (`Explicit`), where it also
/// moves corners and child chains. `None` opts out entirely and fails
/// layout validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeightCorrection {
    /// No correction at all. Invalid in a finalized layout.
    None,
    /// Solids are generated [`SWITCH_TOP_DROP`] lower; the chain is untouched.
    #[default]
    SwitchDefault,
    /// The drop is part of the key's chain; solids are generated as-is.
    Explicit,
}

/// A positioned rectangular key body.
///
/// Owns its pose chain; corner queries and solid generation are read-only
/// projections of that state. Edge extensions are plain public fields the
/// caller may adjust after construction, before solids are generated.
#[derive(Debug)]
pub struct Key {
    name: String,
    chain: Chain,
    correction: HeightCorrection,

    /// Extra footprint width beyond the top edge.
    pub extra_width_top: f64,
    /// Extra footprint width beyond the bottom edge.
    pub extra_width_bottom: f64,
    /// Extra footprint width beyond the left edge.
    pub extra_width_left: f64,
    /// Extra footprint width beyond the right edge.
    pub extra_width_right: f64,
}

impl Key {
    /// Create a key parented to `parent`, with an identity local pose.
    #[must_use]
    pub fn new(name: impl Into<String>, parent: &Chain) -> Self {
        Self {
            name: name.into(),
            chain: parent.derive(),
            correction: HeightCorrection::default(),
            extra_width_top: 0.0,
            extra_width_bottom: 0.0,
            extra_width_left: 0.0,
            extra_width_right: 0.0,
        }
    }

    /// Set the local pose: rotation about X, then Y, then Z, then the
    /// translation to `(x, y, z)`.
    #[must_use]
    pub fn with_pose(mut self, x: f64, y: f64, z: f64, rx: f64, ry: f64, rz: f64) -> Self {
        self.chain.rotate_x(rx);
        self.chain.rotate_y(ry);
        self.chain.rotate_z(rz);
        self.chain.translate(x, y, z);
        self
    }

    /// Set an unrotated local position.
    #[must_use]
    pub fn with_position(mut self, x: f64, y: f64, z: f64) -> Self {
        self.chain.translate(x, y, z);
        self
    }

    /// Override the height-correction state.
    #[must_use]
    pub fn with_correction(mut self, correction: HeightCorrection) -> Self {
        self.correction = correction;
        self
    }

    /// The key's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The key's pose chain.
    #[must_use]
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// The active height-correction mechanism.
    #[must_use]
    pub fn correction(&self) -> HeightCorrection {
        self.correction
    }

    /// Replace the generation-time default drop with an explicit chain step.
    ///
    /// Appends `Translate(0, 0, -10)` to the key's chain, so corners and
    /// any chains parented to this key move with it. A key opted out with
    /// [`HeightCorrection::None`] is left untouched.
    ///
    /// # Errors
    ///
    /// [`LayoutError::DoubleCorrection`] if the chain already carries the
    /// drop: applying it twice would sink the key a full switch height.
    pub fn correct_height(&mut self) -> LayoutResult<()> {
        match self.correction {
            HeightCorrection::Explicit => Err(LayoutError::DoubleCorrection {
                name: self.name.clone(),
            }),
            HeightCorrection::None => Ok(()),
            HeightCorrection::SwitchDefault => {
                self.chain.translate(0.0, 0.0, -SWITCH_TOP_DROP);
                self.correction = HeightCorrection::Explicit;
                Ok(())
            }
        }
    }

    fn corner(&self, dx: f64, dy: f64) -> Chain {
        self.chain.derive().with_translation(dx, dy, 0.0)
    }

    fn half_top(&self) -> f64 {
        KEY_FOOTPRINT / 2.0 + self.extra_width_top
    }

    fn half_bottom(&self) -> f64 {
        KEY_FOOTPRINT / 2.0 + self.extra_width_bottom
    }

    fn half_left(&self) -> f64 {
        KEY_FOOTPRINT / 2.0 + self.extra_width_left
    }

    fn half_right(&self) -> f64 {
        KEY_FOOTPRINT / 2.0 + self.extra_width_right
    }

    /// A fresh chain posed at the top-left footprint corner.
    #[must_use]
    pub fn top_left(&self) -> Chain {
        self.corner(-self.half_left(), self.half_top())
    }

    /// A fresh chain posed at the top-right footprint corner.
    #[must_use]
    pub fn top_right(&self) -> Chain {
        self.corner(self.half_right(), self.half_top())
    }

    /// A fresh chain posed at the bottom-left footprint corner.
    #[must_use]
    pub fn bottom_left(&self) -> Chain {
        self.corner(-self.half_left(), -self.half_bottom())
    }

    /// A fresh chain posed at the bottom-right footprint corner.
    #[must_use]
    pub fn bottom_right(&self) -> Chain {
        self.corner(self.half_right(), -self.half_bottom())
    }

    /// The switch housing solid, posed in world space.
    #[must_use]
    pub fn switch_solid(&self) -> Solid {
        self.chain.apply_solid(&self.drop_if_default(&switch_housing()))
    }

    /// The keycap solid, posed in world space. Uncolored; callers tag it.
    #[must_use]
    pub fn cap_solid(&self) -> Solid {
        self.chain.apply_solid(&self.drop_if_default(&keycap()))
    }

    fn drop_if_default(&self, solid: &Solid) -> Solid {
        match self.correction {
            HeightCorrection::SwitchDefault => solid.translate_z(-SWITCH_TOP_DROP),
            HeightCorrection::None | HeightCorrection::Explicit => solid.clone(),
        }
    }
}

/// Plate segment with the switch cutout, top face at the local origin.
fn switch_housing() -> Solid {
    let plate = Solid::cuboid(KEY_FOOTPRINT, KEY_FOOTPRINT, PLATE_DEPTH);
    let cutout = Solid::cuboid(SWITCH_CUTOUT, SWITCH_CUTOUT, PLATE_DEPTH + 1.0);
    plate.subtract(&cutout).translate_z(-PLATE_DEPTH / 2.0)
}

/// Keycap block; its tip reaches [`SWITCH_TOP_DROP`] above the switch top.
fn keycap() -> Solid {
    Solid::cuboid(KEY_FOOTPRINT, KEY_FOOTPRINT, CAP_DEPTH)
        .translate_z(SWITCH_TOP_DROP - CAP_DEPTH / 2.0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use scad_solid::Point3;

    fn test_key() -> Key {
        Key::new("test", &Chain::new())
    }

    #[test]
    fn corner_queries_are_pure() {
        let key = test_key().with_position(3.0, 4.0, 5.0);
        let a = key.top_left().world_matrix();
        let b = key.top_left().world_matrix();
        assert_relative_eq!(a, b, epsilon = 0.0);
    }

    #[test]
    fn corners_include_edge_extensions() {
        let mut key = test_key();
        key.extra_width_left = 6.0;
        key.extra_width_top = 3.0;

        let p = key.top_left().apply_point(Point3::origin());
        assert_relative_eq!(p.x, -(KEY_FOOTPRINT / 2.0 + 6.0), epsilon = 1e-9);
        assert_relative_eq!(p.y, KEY_FOOTPRINT / 2.0 + 3.0, epsilon = 1e-9);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn corner_mutation_does_not_touch_the_key() {
        let key = test_key();
        let mut corner = key.bottom_right();
        corner.translate(100.0, 0.0, 0.0);

        let p = key.chain().apply_point(Point3::origin());
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn explicit_correction_moves_corners() {
        let mut key = test_key();
        key.correct_height().unwrap();

        let p = key.top_left().apply_point(Point3::origin());
        assert_relative_eq!(p.z, -SWITCH_TOP_DROP, epsilon = 1e-9);
    }

    #[test]
    fn default_correction_moves_solids_only() {
        let key = test_key();
        assert_eq!(key.correction(), HeightCorrection::SwitchDefault);

        // corners stay at the pose reference height
        let p = key.top_left().apply_point(Point3::origin());
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-9);

        // while the generated solid carries the drop
        let scad = key.switch_solid().to_scad();
        assert!(scad.contains("translate([0, 0, -10])"));
    }

    #[test]
    fn double_correction_is_rejected() {
        let mut key = test_key();
        key.correct_height().unwrap();
        let err = key.correct_height().unwrap_err();
        assert!(matches!(err, LayoutError::DoubleCorrection { .. }));
    }

    #[test]
    fn opted_out_key_is_left_alone() {
        let mut key = test_key().with_correction(HeightCorrection::None);
        key.correct_height().unwrap();
        assert_eq!(key.correction(), HeightCorrection::None);
    }

    #[test]
    fn switch_solid_is_posed_by_the_chain() {
        let key = test_key().with_position(60.0, -9.18, 42.83);
        let scad = key.switch_solid().to_scad();
        assert!(scad.starts_with("multmatrix"));
        assert!(scad.contains("difference"));
    }
}
