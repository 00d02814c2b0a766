use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::ImageExtension;

/// Output name for a candidate: same stem, `.webp` extension.
pub fn output_file_name(input: &Path) -> OsString {
    let mut name = input
        .file_stem()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".webp");
    name
}

/// Eligible files directly inside `input_dir`, in directory enumeration
/// order, plus the number of entries that were skipped.
///
/// Eligibility is decided by name alone (see `ImageExtension::from_path`).
/// Subdirectories are never descended into; one whose name matches is still
/// returned, so the caller records it as a failed conversion.
pub fn iterate_candidates(input_dir: &Path) -> Result<(Vec<PathBuf>, usize)> {
    if !input_dir.is_dir() {
        return Err(Error::DirectoryNotFound {
            path: input_dir.to_path_buf(),
        });
    }

    let mut candidates = Vec::new();
    let mut skipped = 0;
    for entry in std::fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();

        if ImageExtension::from_path(&path).is_none() {
            debug!("Skipping: {:?}", path);
            skipped += 1;
            continue;
        }
        candidates.push(path);
    }
    Ok((candidates, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"").unwrap();
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        let mut out: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        out.sort();
        out
    }

    #[test]
    fn output_name_replaces_extension() {
        assert_eq!(output_file_name(Path::new("dir/cover.PNG")), "cover.webp");
        assert_eq!(output_file_name(Path::new("scene.01.jpeg")), "scene.01.webp");
    }

    #[test]
    fn filters_by_extension_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["IMAGE.PNG", "image.Png", "photo.jpg", "photo2.JPEG", "c.txt", "d.gif"] {
            touch(dir.path(), name);
        }

        let (candidates, skipped) = iterate_candidates(dir.path()).unwrap();
        assert_eq!(
            names(&candidates),
            vec!["IMAGE.PNG", "image.Png", "photo.jpg", "photo2.JPEG"]
        );
        assert_eq!(skipped, 2);
    }

    #[test]
    fn does_not_descend_into_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        touch(&nested, "inner.png");
        touch(dir.path(), "top.png");

        let (candidates, skipped) = iterate_candidates(dir.path()).unwrap();
        assert_eq!(names(&candidates), vec!["top.png"]);
        assert_eq!(skipped, 1);
    }

    #[test]
    fn directory_with_image_name_is_a_candidate() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("folder.png")).unwrap();

        let (candidates, skipped) = iterate_candidates(dir.path()).unwrap();
        assert_eq!(names(&candidates), vec!["folder.png"]);
        assert_eq!(skipped, 0);
    }

    #[test]
    fn dotfile_keeps_its_name_as_stem() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), ".png");

        let (candidates, _) = iterate_candidates(dir.path()).unwrap();
        assert_eq!(names(&candidates), vec![".png"]);
        assert_eq!(output_file_name(&candidates[0]), ".png.webp");
    }

    #[test]
    fn missing_folder_is_directory_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert!(matches!(
            iterate_candidates(&missing),
            Err(Error::DirectoryNotFound { path }) if path == missing
        ));
    }
}
