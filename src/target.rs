use std::fs;
use std::path::PathBuf;

use crate::error::{BumpError, Result};
use crate::patcher::{self, UpdateResult};

/// Locates the `version` attribute on a `<control ...>` opening tag.
pub const CONTROL_MANIFEST_PATTERN: &str = r#"(<control\b[^>]*\bversion=")([^"]+)(")"#;

/// Locates the text of a `<Version>...</Version>` element.
pub const SOLUTION_PATTERN: &str = r"(<Version>)([^<]+)(</Version>)";

/// A file holding one version string, and the pattern that finds it.
#[derive(Debug, Clone)]
pub struct PatchTarget {
    pub label: &'static str,
    pub path: PathBuf,
    pub pattern: &'static str,
}

impl PatchTarget {
    /// The component manifest target.
    pub fn control_manifest(path: impl Into<PathBuf>) -> Self {
        PatchTarget {
            label: "ControlManifest",
            path: path.into(),
            pattern: CONTROL_MANIFEST_PATTERN,
        }
    }

    /// The solution descriptor target.
    pub fn solution(path: impl Into<PathBuf>) -> Self {
        PatchTarget {
            label: "Solution",
            path: path.into(),
            pattern: SOLUTION_PATTERN,
        }
    }
}

/// Bump the version inside `target` and write the file back in place.
///
/// The file is only written when the pattern matched and the value parsed;
/// nothing is backed up.
pub fn update_target(target: &PatchTarget) -> Result<UpdateResult> {
    let regex = patcher::compile(target.pattern)?;

    tracing::debug!(path = %target.path.display(), "reading {}", target.label);
    let text = fs::read_to_string(&target.path).map_err(|e| BumpError::io(&target.path, e))?;

    let (updated, result) = patcher::bump_value(&regex, &text)?;

    fs::write(&target.path, updated).map_err(|e| BumpError::io(&target.path, e))?;
    tracing::info!(
        path = %target.path.display(),
        old = %result.old,
        new = %result.new,
        "bumped {} version",
        target.label
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_update_control_manifest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ControlManifest.Input.xml");
        fs::write(
            &path,
            "<manifest>\n  <control namespace=\"x\" constructor=\"y\" version=\"2.1.9\" display-name-key=\"z\">\n</manifest>\n",
        )
        .unwrap();

        let result = update_target(&PatchTarget::control_manifest(&path)).unwrap();
        assert_eq!(result.old, "2.1.9");
        assert_eq!(result.new, "2.1.10");
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "<manifest>\n  <control namespace=\"x\" constructor=\"y\" version=\"2.1.10\" display-name-key=\"z\">\n</manifest>\n"
        );
    }

    #[test]
    fn test_control_pattern_ignores_other_tags() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ControlManifest.Input.xml");
        fs::write(
            &path,
            "<?xml version=\"1.0\"?>\n<controls version=\"9.9.9\"/>\n<control version=\"1.0.0\">",
        )
        .unwrap();

        update_target(&PatchTarget::control_manifest(&path)).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "<?xml version=\"1.0\"?>\n<controls version=\"9.9.9\"/>\n<control version=\"1.0.1\">"
        );
    }

    #[test]
    fn test_update_solution() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Solution.xml");
        fs::write(&path, "<SolutionManifest>\n  <Version>1.0</Version>\n</SolutionManifest>").unwrap();

        let result = update_target(&PatchTarget::solution(&path)).unwrap();
        assert_eq!(result.old, "1.0");
        assert_eq!(result.new, "1.0.1");
    }

    #[test]
    fn test_not_found_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Solution.xml");
        let original = "<SolutionManifest></SolutionManifest>";
        fs::write(&path, original).unwrap();

        let err = update_target(&PatchTarget::solution(&path)).unwrap_err();
        assert!(matches!(err, BumpError::NotFound(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = update_target(&PatchTarget::solution(dir.path().join("missing.xml"))).unwrap_err();
        assert!(matches!(err, BumpError::Io { .. }));
    }
}
