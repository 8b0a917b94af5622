//! Transform chain nodes and evaluation.

use std::cell::RefCell;
use std::rc::Rc;

use nalgebra::{Matrix4, Point3, Rotation3, Vector3};
use scad_solid::Solid;

use crate::error::{ChainError, ChainResult};

/// A single affine step. Angles are degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Translate by the given offset.
    Translate(Vector3<f64>),
    /// Rotate about the X axis.
    RotateX(f64),
    /// Rotate about the Y axis.
    RotateY(f64),
    /// Rotate about the Z axis.
    RotateZ(f64),
}

impl Step {
    fn matrix(self) -> Matrix4<f64> {
        match self {
            Self::Translate(v) => Matrix4::new_translation(&v),
            Self::RotateX(deg) => {
                Rotation3::from_axis_angle(&Vector3::x_axis(), deg.to_radians()).to_homogeneous()
            }
            Self::RotateY(deg) => {
                Rotation3::from_axis_angle(&Vector3::y_axis(), deg.to_radians()).to_homogeneous()
            }
            Self::RotateZ(deg) => {
                Rotation3::from_axis_angle(&Vector3::z_axis(), deg.to_radians()).to_homogeneous()
            }
        }
    }
}

#[derive(Debug)]
struct Node {
    steps: Vec<Step>,
    parent: Option<usize>,
}

/// A composable transform chain: local affine steps plus a parent link.
///
/// All chains of one tree share a node arena; a `Chain` is a cheap handle
/// of a stable node index into it. [`Chain::new`] roots a fresh arena,
/// [`Chain::derive`] and [`Chain::fork`] create further nodes in the same
/// one. Cloning a handle aliases the same node; use [`Chain::fork`] for the
/// value-copy that leaves the original untouched.
#[derive(Debug, Clone)]
pub struct Chain {
    arena: Rc<RefCell<Vec<Node>>>,
    id: usize,
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl Chain {
    /// Create a root chain with no steps and no parent, in a fresh arena.
    #[must_use]
    pub fn new() -> Self {
        Self {
            arena: Rc::new(RefCell::new(vec![Node {
                steps: Vec::new(),
                parent: None,
            }])),
            id: 0,
        }
    }

    fn push_node(&self, node: Node) -> Self {
        let mut arena = self.arena.borrow_mut();
        let id = arena.len();
        arena.push(node);
        Self {
            arena: Rc::clone(&self.arena),
            id,
        }
    }

    /// Create an empty child chain parented to this one.
    #[must_use]
    pub fn derive(&self) -> Self {
        self.push_node(Node {
            steps: Vec::new(),
            parent: Some(self.id),
        })
    }

    /// Copy this chain's steps and parent link into a new node.
    ///
    /// Mutating the copy leaves this chain untouched, while the shared
    /// ancestry stays live through the parent link.
    #[must_use]
    pub fn fork(&self) -> Self {
        let node = {
            let arena = self.arena.borrow();
            Node {
                steps: arena[self.id].steps.clone(),
                parent: arena[self.id].parent,
            }
        };
        self.push_node(node)
    }

    /// Append a translation step.
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.push_step(Step::Translate(Vector3::new(dx, dy, dz)));
    }

    /// Append a rotation about the X axis, in degrees.
    pub fn rotate_x(&mut self, degrees: f64) {
        self.push_step(Step::RotateX(degrees));
    }

    /// Append a rotation about the Y axis, in degrees.
    pub fn rotate_y(&mut self, degrees: f64) {
        self.push_step(Step::RotateY(degrees));
    }

    /// Append a rotation about the Z axis, in degrees.
    pub fn rotate_z(&mut self, degrees: f64) {
        self.push_step(Step::RotateZ(degrees));
    }

    /// Builder form of [`Chain::translate`].
    #[must_use]
    pub fn with_translation(mut self, dx: f64, dy: f64, dz: f64) -> Self {
        self.translate(dx, dy, dz);
        self
    }

    /// Builder form of [`Chain::rotate_x`].
    #[must_use]
    pub fn with_rotation_x(mut self, degrees: f64) -> Self {
        self.rotate_x(degrees);
        self
    }

    /// Builder form of [`Chain::rotate_y`].
    #[must_use]
    pub fn with_rotation_y(mut self, degrees: f64) -> Self {
        self.rotate_y(degrees);
        self
    }

    /// Builder form of [`Chain::rotate_z`].
    #[must_use]
    pub fn with_rotation_z(mut self, degrees: f64) -> Self {
        self.rotate_z(degrees);
        self
    }

    fn push_step(&mut self, step: Step) {
        self.arena.borrow_mut()[self.id].steps.push(step);
    }

    /// Splice another chain's local steps before this chain's own steps.
    ///
    /// Only the donor's own steps are copied; its ancestry is ignored. The
    /// spliced steps apply to the point before anything this chain already
    /// does: "move from here, then evaluate as if originally posed here".
    pub fn prepend(&mut self, donor: &Self) {
        let steps = donor.local_steps();
        self.arena.borrow_mut()[self.id]
            .steps
            .splice(0..0, steps);
    }

    /// Set or replace this chain's parent link.
    ///
    /// # Errors
    ///
    /// [`ChainError::ForeignChain`] if `parent` belongs to a different
    /// arena, [`ChainError::CircularParent`] if the link would create a
    /// cycle. Validation happens here so evaluation never has to re-check.
    pub fn bind_parent(&mut self, parent: &Self) -> ChainResult<()> {
        if !Rc::ptr_eq(&self.arena, &parent.arena) {
            return Err(ChainError::ForeignChain);
        }
        {
            let arena = self.arena.borrow();
            let mut cursor = Some(parent.id);
            while let Some(id) = cursor {
                if id == self.id {
                    return Err(ChainError::CircularParent { id: self.id });
                }
                cursor = arena[id].parent;
            }
        }
        self.arena.borrow_mut()[self.id].parent = Some(parent.id);
        Ok(())
    }

    /// This chain's own steps, without ancestry.
    #[must_use]
    pub fn local_steps(&self) -> Vec<Step> {
        self.arena.borrow()[self.id].steps.clone()
    }

    /// Evaluate the full world transform: parent world map composed with
    /// this chain's local steps.
    ///
    /// Deterministic and side-effect free; recomputed from the current
    /// ancestry on every call.
    #[must_use]
    pub fn world_matrix(&self) -> Matrix4<f64> {
        let arena = self.arena.borrow();

        let mut lineage = Vec::new();
        let mut cursor = Some(self.id);
        while let Some(id) = cursor {
            lineage.push(id);
            cursor = arena[id].parent;
        }

        let mut world = Matrix4::identity();
        for &id in lineage.iter().rev() {
            world *= local_matrix(&arena[id].steps);
        }
        world
    }

    /// Apply the world transform to a point.
    #[must_use]
    pub fn apply_point(&self, point: Point3<f64>) -> Point3<f64> {
        self.world_matrix().transform_point(&point)
    }

    /// Apply the world transform to a solid.
    #[must_use]
    pub fn apply_solid(&self, solid: &Solid) -> Solid {
        solid.multmatrix(self.world_matrix())
    }
}

/// Compose local steps with the earliest step innermost.
fn local_matrix(steps: &[Step]) -> Matrix4<f64> {
    let mut local = Matrix4::identity();
    for step in steps {
        local = step.matrix() * local;
    }
    local
}
