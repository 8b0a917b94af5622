//! Wall anchors and outward directions.

use case_transform::Chain;

/// Outward direction of a wall anchor, in its corner's local XY plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Local +Y.
    Up,
    /// Local -Y.
    Down,
    /// Local -X.
    Left,
    /// Local +X.
    Right,
}

/// Per-direction outward geometry: translation axis and tilt.
struct OutwardSpec {
    dx: f64,
    dy: f64,
    tilt: TiltAxis,
    tilt_sign: f64,
}

enum TiltAxis {
    X,
    Y,
}

/// Indexed by `Direction as usize`: Up, Down, Left, Right.
const OUTWARD_SPECS: [OutwardSpec; 4] = [
    OutwardSpec {
        dx: 0.0,
        dy: 1.0,
        tilt: TiltAxis::X,
        tilt_sign: -1.0,
    },
    OutwardSpec {
        dx: 0.0,
        dy: -1.0,
        tilt: TiltAxis::X,
        tilt_sign: 1.0,
    },
    OutwardSpec {
        dx: -1.0,
        dy: 0.0,
        tilt: TiltAxis::Y,
        tilt_sign: -1.0,
    },
    OutwardSpec {
        dx: 1.0,
        dy: 0.0,
        tilt: TiltAxis::Y,
        tilt_sign: 1.0,
    },
];

impl Direction {
    /// A detached chain that moves `distance` outward and tilts the wall
    /// by `tilt_degrees` about the perpendicular horizontal axis.
    ///
    /// Meant to be [`Chain::prepend`]ed to a corner chain: step outward
    /// from the corner, then evaluate as if originally posed there.
    #[must_use]
    pub fn outward_chain(self, distance: f64, tilt_degrees: f64) -> Chain {
        let spec = &OUTWARD_SPECS[self as usize];
        let chain = Chain::new().with_translation(spec.dx * distance, spec.dy * distance, 0.0);
        match spec.tilt {
            TiltAxis::X => chain.with_rotation_x(spec.tilt_sign * tilt_degrees),
            TiltAxis::Y => chain.with_rotation_y(spec.tilt_sign * tilt_degrees),
        }
    }
}

/// One anchor of the wall ring: a corner pose, the outward direction, and
/// per-anchor slack.
#[derive(Debug, Clone)]
pub struct WallAnchor {
    /// The corner chain the wall attaches to.
    pub chain: Chain,
    /// Which way the wall leaves the corner.
    pub direction: Direction,
    /// Extra outward distance beyond the standoff.
    pub extra_distance: f64,
    /// Extra footprint width beyond the minimum.
    pub extra_width: f64,
}

impl WallAnchor {
    /// An anchor with no extra slack.
    #[must_use]
    pub fn new(chain: Chain, direction: Direction) -> Self {
        Self {
            chain,
            direction,
            extra_distance: 0.0,
            extra_width: 0.0,
        }
    }

    /// Set the extra outward distance and footprint width.
    #[must_use]
    pub fn with_slack(mut self, extra_distance: f64, extra_width: f64) -> Self {
        self.extra_distance = extra_distance;
        self.extra_width = extra_width;
        self
    }
}
