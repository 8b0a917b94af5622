//! Constructive solid geometry values with OpenSCAD serialization.
//!
//! This crate provides the solid-geometry kernel for the case generator:
//!
//! - [`Solid`] - An immutable CSG expression (primitives + combinators)
//! - [`union_all`] / [`hull_all`] - N-ary boolean and convex-hull combinators
//! - [`save_scad`] - Serialization to an OpenSCAD script file
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`. Downstream
//! crates assume millimeters. Angles are degrees (the OpenSCAD convention).
//!
//! # Value semantics
//!
//! A [`Solid`] is an opaque, immutable expression tree. Every combinator is
//! pure: it borrows its operands and returns a new value. Cloning is cheap
//! (reference-counted), so solids can be threaded through a pipeline and
//! reused freely without aliasing concerns.
//!
//! # Example
//!
//! ```
//! use scad_solid::{Solid, union_all};
//!
//! let boss = Solid::cylinder(8.0, 5.0, 30).translate_z(4.0);
//! let plate = Solid::cuboid(40.0, 40.0, 3.0);
//! let part = union_all([plate, boss]).mirror_x();
//!
//! assert!(part.to_scad().starts_with("mirror"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod solid;
mod writer;

pub use error::{WriteError, WriteResult};
pub use solid::{hull_all, union_all, Solid};
pub use writer::save_scad;

// Re-export nalgebra types used in the public API
pub use nalgebra::{Matrix4, Point3, Vector3};
