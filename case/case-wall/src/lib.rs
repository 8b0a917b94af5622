//! Wall synthesis: turning a ring of boundary anchors into a closed skin.
//!
//! Given an ordered ring of [`WallAnchor`]s — each a corner pose, an
//! outward [`Direction`], and optional slack — [`synthesize_wall`] builds a
//! two-element solid *slice* per anchor and chains consecutive slices into
//! a continuous shell with pairwise convex hulls. The ring is cyclic: the
//! last anchor connects back to the first.
//!
//! # Ring preconditions
//!
//! The ring must be wound counter-clockwise, must not self-cross in
//! projection, and adjacent anchors must be close enough that their hull
//! does not bridge through another body's footprint. None of this is
//! checked: a malformed ring silently produces a self-intersecting shell.
//! Only the ring size and degenerate outward vectors are rejected.
//!
//! # Example
//!
//! ```
//! use case_transform::Chain;
//! use case_wall::{synthesize_wall, Direction, WallAnchor};
//!
//! let corner = |x: f64, y: f64| Chain::new().with_translation(x, y, 0.0);
//! let ring = vec![
//!     WallAnchor::new(corner(-9.0, 9.0), Direction::Up),
//!     WallAnchor::new(corner(-9.0, -9.0), Direction::Left),
//!     WallAnchor::new(corner(9.0, -9.0), Direction::Down),
//!     WallAnchor::new(corner(9.0, 9.0), Direction::Right),
//! ];
//!
//! let segments = synthesize_wall(&ring).unwrap();
//! assert_eq!(segments.len(), 8); // two hulls per anchor
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod anchor;
mod error;
mod synthesize;

pub use anchor::{Direction, WallAnchor};
pub use error::{WallError, WallResult};
pub use synthesize::{
    post_connector, synthesize_wall, WALL_FOOT_WIDTH, WALL_STANDOFF, WALL_TILT_DEGREES,
};
