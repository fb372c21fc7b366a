use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result, bail};
use percent_encoding::percent_decode_str;

/// Encodes a project path into its directory name under `~/.claude/projects`.
///
/// Every `/` becomes `-`, so `/Users/foo/bar` is stored as `-Users-foo-bar`.
/// The mapping is lossy: dashes already in the path come back as separators.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use session_atlas::encode_path;
///
/// assert_eq!(encode_path(Path::new("/Users/foo/bar")), "-Users-foo-bar");
/// ```
pub fn encode_path(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let encoded = raw.replace('/', "-");
    if encoded.starts_with('-') { encoded } else { format!("-{}", encoded) }
}

/// Best-effort inverse of [`encode_path`].
///
/// Dash-encoded names map every `-` back to `/`. Names containing `%` were
/// written by older percent-encoding tools and are percent-decoded instead.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use session_atlas::decode_path;
///
/// assert_eq!(decode_path("-Users-foo-bar"), PathBuf::from("/Users/foo/bar"));
/// assert_eq!(decode_path("-Users%2Ffoo%2Fbar"), PathBuf::from("/Users/foo/bar"));
/// ```
pub fn decode_path(encoded: &str) -> PathBuf {
    let body = encoded.strip_prefix('-').unwrap_or(encoded);

    let decoded = if body.contains('%') {
        percent_decode_str(body).decode_utf8_lossy().into_owned()
    } else {
        body.replace('-', "/")
    };
    PathBuf::from(format!("/{}", decoded))
}

/// Decodes a project directory name, rejecting results that are not plain
/// absolute paths.
///
/// # Errors
///
/// Returns an error if the decoded path contains a `..` component or is not absolute.
pub fn decode_project_path(encoded: &str) -> Result<PathBuf> {
    let path = decode_path(encoded);

    if path.components().any(|c| c == Component::ParentDir) {
        bail!("Path contains '..' component: {}", path.display());
    }
    if !path.is_absolute() {
        bail!("Path must be absolute: {}", path.display());
    }
    Ok(path)
}

/// Fails when `path` is itself a symbolic link (the link is inspected, not its target).
///
/// # Errors
///
/// Returns an error if the metadata cannot be read or the path is a symlink.
pub fn validate_path_not_symlink(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .with_context(|| format!("Failed to read metadata: {}", path.display()))?;

    if metadata.file_type().is_symlink() {
        bail!("Symlinks are not allowed: {}", path.display());
    }
    Ok(())
}

/// Shortens a path under the home directory to `~/...` for display.
///
/// ```no_run
/// use std::path::Path;
/// use session_atlas::format_path_with_tilde;
///
/// // "~/.claude" when the home directory is /Users/alice
/// let shown = format_path_with_tilde(Path::new("/Users/alice/.claude"));
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    tilde_relative(path, dirs::home_dir().as_deref())
}

fn tilde_relative(path: &Path, home: Option<&Path>) -> String {
    match home.and_then(|home| path.strip_prefix(home).ok()) {
        Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Some(rest) => format!("~/{}", rest.display()),
        None => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_path() {
        assert_eq!(encode_path(Path::new("/Users/foo/bar")), "-Users-foo-bar");
        assert_eq!(encode_path(Path::new("/d/@org/api")), "-d-@org-api");
        assert_eq!(encode_path(Path::new("relative/dir")), "-relative-dir");
    }

    #[test]
    fn test_decode_dash_encoded_name() {
        assert_eq!(decode_path("-Users-me-code-a"), PathBuf::from("/Users/me/code/a"));
        assert_eq!(decode_path("-d-@org-api"), PathBuf::from("/d/@org/api"));
    }

    #[test]
    fn test_decode_percent_encoded_name() {
        assert_eq!(decode_path("-Users%2Ffoo%2Fbar"), PathBuf::from("/Users/foo/bar"));
        assert_eq!(decode_path("-Users%2Fmy-app"), PathBuf::from("/Users/my-app"));
    }

    #[test]
    fn test_dashes_in_directory_names_are_not_recoverable() {
        let original = Path::new("/Users/me/my-app");
        assert_eq!(decode_path(&encode_path(original)), PathBuf::from("/Users/me/my/app"));
    }

    #[test]
    fn test_encode_then_decode_plain_segments() {
        let original = Path::new("/Users/test/Documents/project");
        assert_eq!(decode_path(&encode_path(original)), original);
    }

    #[test]
    fn test_decode_project_path_rejects_traversal() {
        assert!(decode_project_path("-Users-foo-bar").is_ok());
        assert!(decode_project_path("-Users-..-etc-passwd").is_err());
        assert!(decode_project_path("-Users%2Ffoo%2F..%2Fetc%2Fpasswd").is_err());
    }

    #[test]
    fn test_validate_path_not_symlink() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(validate_path_not_symlink(dir.path()).is_ok());
        assert!(validate_path_not_symlink(&dir.path().join("missing")).is_err());

        #[cfg(unix)]
        {
            let link = dir.path().join("link");
            std::os::unix::fs::symlink(dir.path(), &link).unwrap();
            let err = validate_path_not_symlink(&link).unwrap_err();
            assert!(err.to_string().contains("Symlinks are not allowed"));
        }
    }

    #[test]
    fn test_tilde_relative() {
        let home = Path::new("/Users/testuser");
        assert_eq!(
            tilde_relative(Path::new("/Users/testuser/Documents/project"), Some(home)),
            "~/Documents/project"
        );
        assert_eq!(tilde_relative(home, Some(home)), "~");
        assert_eq!(tilde_relative(Path::new("/opt/local/bin"), Some(home)), "/opt/local/bin");
        // Sibling directory sharing the home prefix as a string
        assert_eq!(
            tilde_relative(Path::new("/Users/testuser2/x"), Some(home)),
            "/Users/testuser2/x"
        );
        assert_eq!(tilde_relative(Path::new("/a/b"), None), "/a/b");
    }
}
