//! The fixed six-key macropad layout.

use case_transform::Chain;

use crate::error::{LayoutError, LayoutResult};
use crate::key::{HeightCorrection, Key};

/// Grid spacing between adjacent key sites, in mm.
pub const KEY_SPACING: f64 = 19.0;

/// Spacing used for the wide pipe-position key.
const PIPE_KEY_SPACING: f64 = 23.8;

/// Spacing used for the extra-wide return-position key.
const RETURN_KEY_SPACING: f64 = 30.95;

/// The thumb-cluster key arrangement, wired into one tree rooted at a
/// caller-supplied origin chain.
///
/// `backspace` is the seed key carrying the cluster's pose; the other five
/// are parented to it, so adjusting the seed moves the whole cluster. The
/// topology is fixed after construction; per-key edge extensions remain
/// caller-settable through the public key fields.
#[derive(Debug)]
pub struct KeyLayout {
    /// First thumb key and the pose seed for the whole cluster.
    pub backspace: Key,
    /// Second thumb key.
    pub delete: Key,
    /// Bottom side key.
    pub end: Key,
    /// Middle side key.
    pub home: Key,
    /// Top left key.
    pub ctrl: Key,
    /// Top side key.
    pub alt: Key,
}

impl KeyLayout {
    /// Build the layout under `origin` and finalize key heights.
    ///
    /// Construction ends by converting every key's generation-time height
    /// drop into an explicit chain step and validating that exactly one
    /// correction mechanism is active per key.
    ///
    /// # Errors
    ///
    /// [`LayoutError::DoubleCorrection`] or [`LayoutError::MissingCorrection`]
    /// if the exactly-one-correction invariant does not hold.
    pub fn new(origin: &Chain) -> LayoutResult<Self> {
        let backspace =
            Key::new("backspace", origin).with_pose(60.0, -9.18, 42.83, 12.0, -4.5, -21.0);

        let delete =
            Key::new("delete", backspace.chain()).with_position(PIPE_KEY_SPACING, 10.0, 0.0);

        let end = Key::new("end", backspace.chain()).with_position(RETURN_KEY_SPACING, -9.0, 0.0);

        let home =
            Key::new("home", backspace.chain()).with_position(0.0, 10.0 + KEY_SPACING, 0.0);

        let ctrl = Key::new("ctrl", backspace.chain()).with_position(
            KEY_SPACING,
            10.0 + KEY_SPACING,
            0.0,
        );

        let alt = Key::new("alt", backspace.chain()).with_position(
            KEY_SPACING + KEY_SPACING,
            10.0 + KEY_SPACING,
            0.0,
        );

        let mut layout = Self {
            backspace,
            delete,
            end,
            home,
            ctrl,
            alt,
        };

        // Drop every pose origin from the cap tip to the switch top.
        for key in layout.keys_mut() {
            key.correct_height()?;
        }
        layout.validate_corrections()?;
        Ok(layout)
    }

    fn validate_corrections(&self) -> LayoutResult<()> {
        for key in self.all_keys() {
            if key.correction() == HeightCorrection::None {
                return Err(LayoutError::MissingCorrection {
                    name: key.name().to_string(),
                });
            }
        }
        Ok(())
    }

    /// The thumb-cluster keys.
    #[must_use]
    pub fn thumb_keys(&self) -> [&Key; 6] {
        [
            &self.delete,
            &self.backspace,
            &self.ctrl,
            &self.alt,
            &self.home,
            &self.end,
        ]
    }

    /// Every key in the layout.
    #[must_use]
    pub fn all_keys(&self) -> [&Key; 6] {
        self.thumb_keys()
    }

    fn keys_mut(&mut self) -> [&mut Key; 6] {
        [
            &mut self.delete,
            &mut self.backspace,
            &mut self.ctrl,
            &mut self.alt,
            &mut self.home,
            &mut self.end,
        ]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::key::SWITCH_TOP_DROP;
    use approx::assert_relative_eq;
    use scad_solid::Point3;

    fn test_layout() -> KeyLayout {
        KeyLayout::new(&Chain::new()).unwrap()
    }

    #[test]
    fn every_key_ends_explicitly_corrected() {
        let layout = test_layout();
        for key in layout.all_keys() {
            assert_eq!(key.correction(), HeightCorrection::Explicit);
        }
    }

    #[test]
    fn cluster_keys_follow_the_seed() {
        let layout = test_layout();

        // home sits one grid row above the seed in the seed's local frame
        // (plus its own height drop); a rigid pose preserves that offset's
        // length while the seed's rotation mixes it into world X.
        let seed = layout.backspace.chain().apply_point(Point3::origin());
        let home = layout.home.chain().apply_point(Point3::origin());
        let offset = home - seed;
        let local = ((10.0 + KEY_SPACING).powi(2) + SWITCH_TOP_DROP.powi(2)).sqrt();
        assert_relative_eq!(offset.norm(), local, epsilon = 1e-9);
        assert!(offset.x.abs() > 1.0);
    }

    #[test]
    fn children_compose_through_the_live_seed_chain() {
        let layout = test_layout();

        // delete's world pose must equal the seed's world map applied to
        // delete's local offset, with no snapshotting in between
        let expected = layout.backspace.chain().apply_point(Point3::new(
            PIPE_KEY_SPACING,
            10.0,
            -SWITCH_TOP_DROP,
        ));
        let actual = layout.delete.chain().apply_point(Point3::origin());
        assert_relative_eq!(actual.x, expected.x, epsilon = 1e-9);
        assert_relative_eq!(actual.y, expected.y, epsilon = 1e-9);
        assert_relative_eq!(actual.z, expected.z, epsilon = 1e-9);
    }

    #[test]
    fn origin_offset_shifts_every_key() {
        let at_origin = test_layout();
        let shifted = KeyLayout::new(&Chain::new().with_translation(0.0, 0.0, 3.0)).unwrap();

        let a = at_origin.end.chain().apply_point(Point3::origin());
        let b = shifted.end.chain().apply_point(Point3::origin());
        assert_relative_eq!(b.z - a.z, 3.0, epsilon = 1e-9);
        assert_relative_eq!(b.x, a.x, epsilon = 1e-9);
    }

    #[test]
    fn key_enumeration_is_complete() {
        let layout = test_layout();
        let names: Vec<&str> = layout.all_keys().iter().map(|k| k.name()).collect();
        for expected in ["backspace", "delete", "end", "home", "ctrl", "alt"] {
            assert!(names.contains(&expected), "missing {expected}");
        }
    }
}
