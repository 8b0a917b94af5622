//! Writing the output artifacts.

use std::path::Path;

use tracing::info;

use crate::error::AssemblyResult;
use crate::pipeline::CaseSolids;

/// Write the case shell and bottom plate scripts to their output paths.
///
/// # Errors
///
/// [`crate::AssemblyError::Write`] on the first failed write; a partial
/// pair of artifacts is not valid output.
pub fn write_case_files(
    solids: &CaseSolids,
    case_path: &Path,
    plate_path: &Path,
) -> AssemblyResult<()> {
    solids.case_shell.write_to_file(case_path)?;
    solids.bottom_plate.write_to_file(plate_path)?;
    info!(
        "wrote {} and {}",
        case_path.display(),
        plate_path.display()
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::design::macropad_solids;

    #[test]
    fn both_artifacts_are_written() {
        let dir = tempfile::tempdir().unwrap();
        let case_path = dir.path().join("macropad.scad");
        let plate_path = dir.path().join("bottom_macropad.scad");

        let solids = macropad_solids().unwrap();
        write_case_files(&solids, &case_path, &plate_path).unwrap();

        assert!(std::fs::read_to_string(&case_path)
            .unwrap()
            .starts_with("mirror"));
        assert!(std::fs::read_to_string(&plate_path)
            .unwrap()
            .contains("linear_extrude"));
    }

    #[test]
    fn failed_writes_surface_the_path() {
        let solids = macropad_solids().unwrap();
        let err = write_case_files(
            &solids,
            Path::new("/nonexistent-dir/macropad.scad"),
            Path::new("/nonexistent-dir/bottom_macropad.scad"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("macropad.scad"));
    }
}
