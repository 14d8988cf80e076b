// Cache path utilities.
// Resolves the platform cache directory and maps slot names to files.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Get the base cache directory (~/.cache/folio on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "folio").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the file backing a storage slot.
pub fn slot_path(dir: &Path, slot: &str) -> PathBuf {
    dir.join(format!("{}.json", sanitize_name(slot)))
}

/// Path to the log file written while the TUI owns the terminal.
pub fn log_path(dir: &Path) -> PathBuf {
    dir.join("folio.log")
}

/// Sanitize a name for use in filesystem paths.
/// Replaces problematic characters with underscores.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("gh_profile"), "gh_profile");
        assert_eq!(sanitize_name("gh_repos/../x"), "gh_repos_.._x");
        assert_eq!(sanitize_name("owner:name"), "owner_name");
    }

    #[test]
    fn test_slot_and_log_paths() {
        let dir = Path::new("/tmp/folio-cache");
        assert_eq!(
            slot_path(dir, "gh_profile"),
            PathBuf::from("/tmp/folio-cache/gh_profile.json")
        );
        assert!(log_path(dir).ends_with("folio.log"));
    }
}
