//! The CSG expression type and its combinators.

use std::rc::Rc;

use nalgebra::{Matrix4, Vector3};

use crate::error::WriteResult;
use crate::writer;

/// An immutable constructive-solid-geometry value.
///
/// Built from primitives ([`Solid::cube`], [`Solid::cuboid`],
/// [`Solid::cylinder`]) and composed with pure combinators. The expression is
/// only evaluated by the renderer consuming the serialized script; this type
/// never computes geometry itself.
///
/// # Example
///
/// ```
/// use scad_solid::Solid;
///
/// let washer = Solid::cylinder(2.0, 6.0, 40)
///     .subtract(&Solid::cylinder(3.0, 3.0, 40));
/// assert!(washer.to_scad().starts_with("difference"));
/// ```
#[derive(Debug, Clone)]
pub struct Solid {
    node: Rc<Node>,
}

#[derive(Debug)]
pub(crate) enum Node {
    Cube {
        size: Vector3<f64>,
    },
    Cylinder {
        height: f64,
        radius: f64,
        segments: u32,
    },
    Union(Vec<Solid>),
    Hull(Vec<Solid>),
    Difference {
        positive: Solid,
        negative: Solid,
    },
    Projection(Solid),
    LinearExtrude {
        height: f64,
        child: Solid,
    },
    Translate {
        offset: Vector3<f64>,
        child: Solid,
    },
    Rotate {
        degrees: Vector3<f64>,
        child: Solid,
    },
    Mirror {
        normal: Vector3<f64>,
        child: Solid,
    },
    Color {
        name: String,
        child: Solid,
    },
    Multmatrix {
        matrix: Matrix4<f64>,
        child: Solid,
    },
}

impl Solid {
    fn new(node: Node) -> Self {
        Self {
            node: Rc::new(node),
        }
    }

    pub(crate) fn node(&self) -> &Node {
        &self.node
    }

    /// An axis-centered cube with uniform edge length.
    #[must_use]
    pub fn cube(size: f64) -> Self {
        Self::cuboid(size, size, size)
    }

    /// An axis-centered box with the given edge lengths.
    #[must_use]
    pub fn cuboid(x: f64, y: f64, z: f64) -> Self {
        Self::new(Node::Cube {
            size: Vector3::new(x, y, z),
        })
    }

    /// A Z-axis cylinder centered on its axis midpoint.
    ///
    /// `segments` is the facet count used by the renderer (`$fn`).
    #[must_use]
    pub fn cylinder(height: f64, radius: f64, segments: u32) -> Self {
        Self::new(Node::Cylinder {
            height,
            radius,
            segments,
        })
    }

    /// Translate by `(dx, dy, dz)`.
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64, dz: f64) -> Self {
        Self::new(Node::Translate {
            offset: Vector3::new(dx, dy, dz),
            child: self.clone(),
        })
    }

    /// Translate along Z only.
    #[must_use]
    pub fn translate_z(&self, dz: f64) -> Self {
        self.translate(0.0, 0.0, dz)
    }

    /// Rotate about the X axis by `degrees`.
    #[must_use]
    pub fn rotate_x(&self, degrees: f64) -> Self {
        self.rotate(Vector3::new(degrees, 0.0, 0.0))
    }

    /// Rotate about the Y axis by `degrees`.
    #[must_use]
    pub fn rotate_y(&self, degrees: f64) -> Self {
        self.rotate(Vector3::new(0.0, degrees, 0.0))
    }

    /// Rotate about the Z axis by `degrees`.
    #[must_use]
    pub fn rotate_z(&self, degrees: f64) -> Self {
        self.rotate(Vector3::new(0.0, 0.0, degrees))
    }

    fn rotate(&self, degrees: Vector3<f64>) -> Self {
        Self::new(Node::Rotate {
            degrees,
            child: self.clone(),
        })
    }

    /// Mirror across the YZ plane.
    #[must_use]
    pub fn mirror_x(&self) -> Self {
        Self::new(Node::Mirror {
            normal: Vector3::new(1.0, 0.0, 0.0),
            child: self.clone(),
        })
    }

    /// Apply an arbitrary affine transform.
    #[must_use]
    pub fn multmatrix(&self, matrix: Matrix4<f64>) -> Self {
        Self::new(Node::Multmatrix {
            matrix,
            child: self.clone(),
        })
    }

    /// Boolean difference: `self` minus `negative`.
    #[must_use]
    pub fn subtract(&self, negative: &Self) -> Self {
        Self::new(Node::Difference {
            positive: self.clone(),
            negative: negative.clone(),
        })
    }

    /// The 2D silhouette of this solid on the XY plane.
    #[must_use]
    pub fn projection(&self) -> Self {
        Self::new(Node::Projection(self.clone()))
    }

    /// Extrude a 2D silhouette up to `height` along Z.
    #[must_use]
    pub fn linear_extrude(&self, height: f64) -> Self {
        Self::new(Node::LinearExtrude {
            height,
            child: self.clone(),
        })
    }

    /// Tag this solid with a named color (cosmetic, preview only).
    #[must_use]
    pub fn color(&self, name: impl Into<String>) -> Self {
        Self::new(Node::Color {
            name: name.into(),
            child: self.clone(),
        })
    }

    /// Render this solid as an OpenSCAD script.
    #[must_use]
    pub fn to_scad(&self) -> String {
        writer::to_scad(self)
    }

    /// Write the OpenSCAD script for this solid to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WriteError`] if the file cannot be created or
    /// written; no partial output should be treated as valid.
    pub fn write_to_file(&self, path: impl AsRef<std::path::Path>) -> WriteResult<()> {
        writer::save_scad(self, path)
    }
}

/// Union of any number of solids.
#[must_use]
pub fn union_all(solids: impl IntoIterator<Item = Solid>) -> Solid {
    Solid::new(Node::Union(solids.into_iter().collect()))
}

/// Convex hull of any number of solids.
#[must_use]
pub fn hull_all(solids: impl IntoIterator<Item = Solid>) -> Solid {
    Solid::new(Node::Hull(solids.into_iter().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_is_uniform_cuboid() {
        let a = Solid::cube(2.0).to_scad();
        let b = Solid::cuboid(2.0, 2.0, 2.0).to_scad();
        assert_eq!(a, b);
    }

    #[test]
    fn combinators_are_pure() {
        let base = Solid::cube(1.0);
        let moved = base.translate(1.0, 0.0, 0.0);
        // the original expression is untouched
        assert!(base.to_scad().starts_with("cube"));
        assert!(moved.to_scad().starts_with("translate"));
    }

    #[test]
    fn subtract_keeps_operand_order() {
        let s = Solid::cube(2.0).subtract(&Solid::cube(1.0));
        let scad = s.to_scad();
        let pos = scad
            .find("cube([2, 2, 2]")
            .and_then(|p| scad.find("cube([1, 1, 1]").map(|n| (p, n)));
        let Some((p, n)) = pos else {
            panic!("operands missing from {scad}");
        };
        assert!(p < n);
    }

    #[test]
    fn clone_shares_structure() {
        let a = Solid::cylinder(4.0, 1.0, 16);
        let b = a.clone();
        assert_eq!(a.to_scad(), b.to_scad());
    }
}
