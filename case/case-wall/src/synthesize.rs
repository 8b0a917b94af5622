//! The chained-hull wall algorithm.

use nalgebra::Point3;
use scad_solid::{hull_all, Solid};
use tracing::debug;

use crate::anchor::WallAnchor;
use crate::error::{WallError, WallResult};

/// Distance a wall post stands off from its anchor corner, in mm.
pub const WALL_STANDOFF: f64 = 4.8;

/// Outward lean of the wall, in degrees.
pub const WALL_TILT_DEGREES: f64 = 20.0;

/// Minimum footprint width of the wall base, in mm.
///
/// A pure projection of the tilted post can become arbitrarily thin at
/// steep angles; the base is widened back inward by this amount so the
/// ground contact never degenerates.
pub const WALL_FOOT_WIDTH: f64 = 3.3;

const POST_SIZE: f64 = 0.1;
const POST_DEPTH: f64 = 4.0;
const FOOT_CUBE: f64 = 0.1;
const GROUND_SLAB_HEIGHT: f64 = 0.1;
const GROUND_SLAB_LIFT: f64 = 0.05;

/// The connector post placed at each anchor pose: a thin square column
/// whose top sits at the anchor origin.
#[must_use]
pub fn post_connector() -> Solid {
    Solid::cuboid(POST_SIZE, POST_SIZE, POST_DEPTH).translate_z(-POST_DEPTH / 2.0)
}

/// The post foot in anchor-local coordinates.
fn post_foot() -> Point3<f64> {
    Point3::new(0.0, 0.0, -POST_DEPTH)
}

/// One anchor's contribution to the skin: the post-to-base hull and the
/// base-to-ground hull. Consecutive slices are hulled element-wise.
type Slice = [Solid; 2];

/// Synthesize the closed wall shell for an anchor ring.
///
/// Produces one two-element slice per anchor, then connects consecutive
/// slices cyclically: exactly `2 * anchors.len()` hull segments whose union
/// is the shell. See the crate docs for the ring preconditions this
/// function does not check.
///
/// # Errors
///
/// [`WallError::RingTooSmall`] for rings of fewer than three anchors, and
/// [`WallError::DegenerateOutward`] if an anchor's outward offset vanishes
/// in projection (its horizontal direction would be undefined).
pub fn synthesize_wall(anchors: &[WallAnchor]) -> WallResult<Vec<Solid>> {
    if anchors.len() < 3 {
        return Err(WallError::RingTooSmall {
            count: anchors.len(),
        });
    }

    let slices = anchors
        .iter()
        .enumerate()
        .map(|(index, anchor)| build_slice(index, anchor))
        .collect::<WallResult<Vec<Slice>>>()?;
    debug!("built {} wall slices", slices.len());

    let mut segments = Vec::with_capacity(slices.len() * 2);
    for (i, slice) in slices.iter().enumerate() {
        let next = &slices[(i + 1) % slices.len()];
        for (element, neighbor) in slice.iter().zip(next.iter()) {
            segments.push(hull_all([element.clone(), neighbor.clone()]));
        }
    }
    debug!("connected ring into {} hull segments", segments.len());

    Ok(segments)
}

/// The two world points the base geometry hangs off: the post foot under
/// the anchor and the foot of the outward-offset, tilted post.
struct FootPair {
    outer: Point3<f64>,
    inward: nalgebra::Vector3<f64>,
}

fn foot_pair(index: usize, anchor: &WallAnchor) -> WallResult<FootPair> {
    let mut outward = anchor.chain.fork();
    outward.prepend(
        &anchor
            .direction
            .outward_chain(WALL_STANDOFF + anchor.extra_distance, WALL_TILT_DEGREES),
    );

    let foot = anchor.chain.apply_point(post_foot());
    let outer = outward.apply_point(post_foot());

    // the outward vector only matters in plan view
    let mut out = outer - foot;
    out.z = 0.0;
    let inward = -out
        .try_normalize(f64::EPSILON)
        .ok_or(WallError::DegenerateOutward { index })?;

    Ok(FootPair { outer, inward })
}

fn build_slice(index: usize, anchor: &WallAnchor) -> WallResult<Slice> {
    let post = anchor.chain.apply_solid(&post_connector());

    let feet = foot_pair(index, anchor)?;
    let width = WALL_FOOT_WIDTH + anchor.extra_width;
    let inner_point = feet.outer + width * feet.inward;

    // widen the base back inward so the footprint never thins out
    let base = hull_all([
        Solid::cube(FOOT_CUBE).translate(feet.outer.x, feet.outer.y, feet.outer.z),
        Solid::cube(FOOT_CUBE).translate(inner_point.x, inner_point.y, inner_point.z),
    ]);

    let ground_slab = base
        .projection()
        .linear_extrude(GROUND_SLAB_HEIGHT)
        .translate_z(GROUND_SLAB_LIFT);

    Ok([
        hull_all([post, base.clone()]),
        hull_all([base, ground_slab]),
    ])
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::anchor::Direction;
    use case_transform::Chain;

    fn corner(x: f64, y: f64) -> Chain {
        Chain::new().with_translation(x, y, 0.0)
    }

    /// Four anchors around a unit square, counter-clockwise from the top
    /// left, one outward direction per side.
    fn unit_square_ring() -> Vec<WallAnchor> {
        vec![
            WallAnchor::new(corner(-0.5, 0.5), Direction::Up),
            WallAnchor::new(corner(-0.5, -0.5), Direction::Left),
            WallAnchor::new(corner(0.5, -0.5), Direction::Down),
            WallAnchor::new(corner(0.5, 0.5), Direction::Right),
        ]
    }

    #[test]
    fn ring_of_n_yields_two_n_segments() {
        let segments = synthesize_wall(&unit_square_ring()).unwrap();
        assert_eq!(segments.len(), 8);
        for segment in &segments {
            assert!(segment.to_scad().starts_with("hull()"));
        }
    }

    #[test]
    fn tiny_rings_are_rejected() {
        let ring = &unit_square_ring()[..2];
        let err = synthesize_wall(ring).unwrap_err();
        assert!(matches!(err, WallError::RingTooSmall { count: 2 }));
    }

    #[test]
    fn shell_is_invariant_under_ring_rotation() {
        let ring = unit_square_ring();
        let mut rotated = unit_square_ring();
        rotated.rotate_left(1);

        let base: Vec<String> = synthesize_wall(&ring)
            .unwrap()
            .iter()
            .map(Solid::to_scad)
            .collect();
        let shifted: Vec<String> = synthesize_wall(&rotated)
            .unwrap()
            .iter()
            .map(Solid::to_scad)
            .collect();

        let mut base_sorted = base.clone();
        let mut shifted_sorted = shifted.clone();
        base_sorted.sort();
        shifted_sorted.sort();
        assert_eq!(base_sorted, shifted_sorted);
        assert_ne!(base, shifted); // only the enumeration start moved
    }

    #[test]
    fn outward_feet_clear_the_footprint() {
        for (index, anchor) in unit_square_ring().iter().enumerate() {
            let feet = foot_pair(index, anchor).unwrap();
            let outside = match anchor.direction {
                Direction::Up => feet.outer.y > 0.5,
                Direction::Down => feet.outer.y < -0.5,
                Direction::Left => feet.outer.x < -0.5,
                Direction::Right => feet.outer.x > 0.5,
            };
            assert!(outside, "anchor {index} foot is inside the square");
        }
    }

    #[test]
    fn inward_vector_points_back_at_the_ring() {
        let ring = unit_square_ring();
        let feet = foot_pair(0, &ring[0]).unwrap();
        // up-facing anchor: inward is -Y, purely horizontal
        assert!(feet.inward.y < -0.99);
        assert!(feet.inward.z.abs() < 1e-12);
    }

    #[test]
    fn extra_distance_pushes_the_foot_further_out() {
        let near = WallAnchor::new(corner(0.0, 0.5), Direction::Up);
        let far = WallAnchor::new(corner(0.0, 0.5), Direction::Up).with_slack(3.0, 0.0);

        let near_foot = foot_pair(0, &near).unwrap();
        let far_foot = foot_pair(0, &far).unwrap();
        assert!(far_foot.outer.y > near_foot.outer.y);
    }

    #[test]
    fn slice_elements_reach_the_ground_slab() {
        let anchor = WallAnchor::new(corner(0.0, 0.5), Direction::Up);
        let [upper, footing] = build_slice(0, &anchor).unwrap();

        assert!(upper.to_scad().contains("cube([0.1, 0.1, 4]"));
        let footing_scad = footing.to_scad();
        assert!(footing_scad.contains("projection()"));
        assert!(footing_scad.contains("linear_extrude(height = 0.1)"));
        assert!(footing_scad.contains("translate([0, 0, 0.05])"));
    }
}
