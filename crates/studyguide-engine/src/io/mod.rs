use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a saved guide document
pub fn read_guide(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Resolve a guide argument: an existing path wins, otherwise the name is
/// looked up in the guides directory (adding `.md` when missing).
pub fn resolve_guide_path(arg: &Path, guides_root: Option<&Path>) -> PathBuf {
    if arg.exists() || arg.is_absolute() {
        return arg.to_path_buf();
    }
    let Some(root) = guides_root else {
        return arg.to_path_buf();
    };
    let candidate = root.join(arg);
    if candidate.exists() || candidate.extension().is_some() {
        candidate
    } else {
        candidate.with_extension("md")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_guide_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.md");

        let result = read_guide(&missing);
        assert!(matches!(result, Err(IoError::NotFound(p)) if p == missing));
    }

    #[test]
    fn test_read_guide() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("guide.md");

        fs::write(&path, "# Title\n").unwrap();
        assert_eq!(read_guide(&path).unwrap(), "# Title\n");
    }

    #[test]
    fn test_resolve_existing_path_wins() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("guide.md");
        fs::write(&path, "x").unwrap();

        let root = TempDir::new().unwrap();
        assert_eq!(resolve_guide_path(&path, Some(root.path())), path);
    }

    #[test]
    fn test_resolve_against_guides_root() {
        let root = TempDir::new().unwrap();
        let resolved = resolve_guide_path(Path::new("rust_ownership"), Some(root.path()));
        assert_eq!(resolved, root.path().join("rust_ownership.md"));

        let resolved = resolve_guide_path(Path::new("notes.txt"), Some(root.path()));
        assert_eq!(resolved, root.path().join("notes.txt"));
    }

    #[test]
    fn test_resolve_without_root_is_unchanged() {
        let resolved = resolve_guide_path(Path::new("does/not/exist.md"), None);
        assert_eq!(resolved, PathBuf::from("does/not/exist.md"));
    }
}
