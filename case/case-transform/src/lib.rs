//! Hierarchical transform chains for positioning rigid bodies.
//!
//! A [`Chain`] is an ordered sequence of affine steps (translate, rotate)
//! plus an optional parent link. Evaluating a chain composes its parent's
//! world transform (transitively) with its own local steps, yielding a
//! single world-space affine map that can be applied to points or solids.
//!
//! # Composition order
//!
//! Earlier steps apply to the point first. `chain.translate(..)` followed by
//! `chain.rotate_x(..)` moves the point, then rotates the result about the
//! chain's local origin. [`Chain::prepend`] therefore splices steps that act
//! *before* everything the chain already does: "move from here, then
//! evaluate as if originally posed here".
//!
//! # Live ancestry
//!
//! Chains reference their parents through live nodes, never snapshots.
//! Rebinding or mutating a parent is immediately visible to every
//! descendant's next evaluation; nothing is cached. Cycles are rejected when
//! [`Chain::bind_parent`] is called, so evaluation itself never has to check.
//!
//! # Example
//!
//! ```
//! use case_transform::Chain;
//! use scad_solid::Point3;
//!
//! let mut origin = Chain::new();
//! origin.translate(10.0, 0.0, 0.0);
//!
//! let mut arm = origin.derive();
//! arm.rotate_z(90.0);
//!
//! let p = arm.apply_point(Point3::new(1.0, 0.0, 0.0));
//! assert!((p.x - 10.0).abs() < 1e-9);
//! assert!((p.y - 1.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod chain;
mod error;

pub use chain::{Chain, Step};
pub use error::{ChainError, ChainResult};
