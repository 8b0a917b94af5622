//! OpenSCAD script emission.
//!
//! Serializes a [`Solid`] expression into the script format consumed by the
//! external renderer. Output is deterministic for a given expression.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use nalgebra::{Matrix4, Vector3};

use crate::error::{WriteError, WriteResult};
use crate::solid::{Node, Solid};

/// Render a solid as an OpenSCAD script string.
#[must_use]
pub fn to_scad(solid: &Solid) -> String {
    let mut out = String::new();
    write_node(&mut out, solid, 0);
    out
}

/// Write a solid's OpenSCAD script to `path`.
///
/// # Errors
///
/// Returns [`WriteError::Io`] carrying the path if the file cannot be
/// created or written.
pub fn save_scad(solid: &Solid, path: impl AsRef<Path>) -> WriteResult<()> {
    let path = path.as_ref();
    let io_err = |source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(to_scad(solid).as_bytes())
        .and_then(|()| writer.flush())
        .map_err(io_err)
}

fn write_node(out: &mut String, solid: &Solid, depth: usize) {
    indent(out, depth);
    match solid.node() {
        Node::Cube { size } => {
            let _ = writeln!(out, "cube([{}], center = true);", vec3(size));
        }
        Node::Cylinder {
            height,
            radius,
            segments,
        } => {
            let _ = writeln!(
                out,
                "cylinder(h = {}, r = {}, $fn = {segments}, center = true);",
                num(*height),
                num(*radius)
            );
        }
        Node::Union(children) => write_block(out, "union()", children, depth),
        Node::Hull(children) => write_block(out, "hull()", children, depth),
        Node::Difference { positive, negative } => {
            out.push_str("difference() {\n");
            write_node(out, positive, depth + 1);
            write_node(out, negative, depth + 1);
            indent(out, depth);
            out.push_str("}\n");
        }
        Node::Projection(child) => write_wrapper(out, "projection()", child, depth),
        Node::LinearExtrude { height, child } => {
            let head = format!("linear_extrude(height = {})", num(*height));
            write_wrapper(out, &head, child, depth);
        }
        Node::Translate { offset, child } => {
            let head = format!("translate([{}])", vec3(offset));
            write_wrapper(out, &head, child, depth);
        }
        Node::Rotate { degrees, child } => {
            let head = format!("rotate([{}])", vec3(degrees));
            write_wrapper(out, &head, child, depth);
        }
        Node::Mirror { normal, child } => {
            let head = format!("mirror([{}])", vec3(normal));
            write_wrapper(out, &head, child, depth);
        }
        Node::Color { name, child } => {
            let head = format!("color(\"{name}\")");
            write_wrapper(out, &head, child, depth);
        }
        Node::Multmatrix { matrix, child } => {
            let head = format!("multmatrix(m = {})", matrix4(matrix));
            write_wrapper(out, &head, child, depth);
        }
    }
}

fn write_block(out: &mut String, head: &str, children: &[Solid], depth: usize) {
    out.push_str(head);
    out.push_str(" {\n");
    for child in children {
        write_node(out, child, depth + 1);
    }
    indent(out, depth);
    out.push_str("}\n");
}

fn write_wrapper(out: &mut String, head: &str, child: &Solid, depth: usize) {
    out.push_str(head);
    out.push_str(" {\n");
    write_node(out, child, depth + 1);
    indent(out, depth);
    out.push_str("}\n");
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

/// Format a scalar with bounded precision and no trailing zeros.
fn num(v: f64) -> String {
    let mut s = format!("{v:.6}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

fn vec3(v: &Vector3<f64>) -> String {
    format!("{}, {}, {}", num(v.x), num(v.y), num(v.z))
}

fn matrix4(m: &Matrix4<f64>) -> String {
    let row = |r: usize| {
        format!(
            "[{}, {}, {}, {}]",
            num(m[(r, 0)]),
            num(m[(r, 1)]),
            num(m[(r, 2)]),
            num(m[(r, 3)])
        )
    };
    format!("[{}, {}, {}, {}]", row(0), row(1), row(2), row(3))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::solid::hull_all;

    #[test]
    fn cube_format() {
        let scad = Solid::cuboid(1.0, 2.0, 0.1).to_scad();
        assert_eq!(scad, "cube([1, 2, 0.1], center = true);\n");
    }

    #[test]
    fn cylinder_format() {
        let scad = Solid::cylinder(8.0, 2.15, 40).to_scad();
        assert_eq!(scad, "cylinder(h = 8, r = 2.15, $fn = 40, center = true);\n");
    }

    #[test]
    fn wrapper_nesting_indents() {
        let scad = Solid::cube(1.0).translate(1.0, 2.0, 3.0).to_scad();
        assert_eq!(
            scad,
            "translate([1, 2, 3]) {\n  cube([1, 1, 1], center = true);\n}\n"
        );
    }

    #[test]
    fn hull_lists_all_children() {
        let scad = hull_all([Solid::cube(1.0), Solid::cube(2.0), Solid::cube(3.0)]).to_scad();
        assert_eq!(scad.matches("cube(").count(), 3);
        assert!(scad.starts_with("hull() {\n"));
    }

    #[test]
    fn multmatrix_format() {
        let scad = Solid::cube(1.0).multmatrix(Matrix4::identity()).to_scad();
        assert!(scad.starts_with(
            "multmatrix(m = [[1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1]])"
        ));
    }

    #[test]
    fn number_formatting_trims_noise() {
        assert_eq!(num(60.0), "60");
        assert_eq!(num(-9.18), "-9.18");
        assert_eq!(num(0.1), "0.1");
        assert_eq!(num(3.000_000_000_000_000_4), "3");
        assert_eq!(num(-0.000_000_01), "0");
    }

    #[test]
    fn save_scad_writes_script() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("part.scad");
        let solid = Solid::cube(2.0).mirror_x();

        save_scad(&solid, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, solid.to_scad());
    }

    #[test]
    fn save_scad_reports_path_on_failure() {
        let solid = Solid::cube(1.0);
        let err = save_scad(&solid, "/nonexistent-dir/part.scad").unwrap_err();
        assert!(err.to_string().contains("/nonexistent-dir/part.scad"));
    }
}
