//! Low-level helpers for building kubeconfig candidate lists.

use std::collections::HashSet;
use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding a platform path list of kubeconfig files.
pub const KUBECONFIG_ENV: &str = "KUBECONFIG";

/// Splits a platform path list (`:` on Unix, `;` on Windows).
///
/// Empty entries are kept; see [`discard_empty_and_duplicates`].
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use kindconf::kubeconfig::split_path_list;
/// use std::ffi::OsStr;
/// use std::path::PathBuf;
///
/// let parts = split_path_list(OsStr::new("a::b"));
/// assert_eq!(parts, vec![PathBuf::from("a"), PathBuf::new(), PathBuf::from("b")]);
/// # }
/// ```
#[must_use]
pub fn split_path_list(value: &OsStr) -> Vec<PathBuf> {
    env::split_paths(value).collect()
}

/// Drops empty entries and repeated entries, keeping first occurrences in order.
///
/// Entries are compared by their raw OS string, so `a/b` and `a//b` are
/// distinct.
///
/// # Examples
///
/// ```
/// use kindconf::kubeconfig::discard_empty_and_duplicates;
/// use std::path::PathBuf;
///
/// let kept = discard_empty_and_duplicates(
///     ["a", "", "a", "b"].into_iter().map(PathBuf::from),
/// );
/// assert_eq!(kept, vec![PathBuf::from("a"), PathBuf::from("b")]);
/// ```
pub fn discard_empty_and_duplicates<I>(paths: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut seen = HashSet::new();
    paths
        .into_iter()
        .filter(|p| !p.as_os_str().is_empty() && seen.insert(p.as_os_str().to_os_string()))
        .collect()
}

/// Returns `<home>/.kube/config`.
///
/// Without a home directory this is the relative path `.kube/config`.
#[must_use]
pub fn default_kubeconfig_path(home: Option<&Path>) -> PathBuf {
    home.unwrap_or_else(|| Path::new(""))
        .join(".kube")
        .join("config")
}

/// Reports whether `path` exists and is not a directory.
///
/// Any stat failure, including permission errors, counts as "does not exist".
///
/// # Examples
///
/// ```
/// use kindconf::kubeconfig::file_exists;
/// use std::path::Path;
///
/// assert!(!file_exists(Path::new("/nonexistent/kube/config")));
/// ```
#[must_use]
pub fn file_exists(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| !meta.is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use tempfile::tempdir;

    fn bufs(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    #[cfg(unix)]
    #[test]
    fn test_split_path_list_unix() {
        assert_eq!(
            split_path_list(OsStr::new("/a:/b:/c")),
            bufs(&["/a", "/b", "/c"])
        );
    }

    #[test]
    fn test_split_path_list_round_trips_join() {
        let joined: OsString = env::join_paths(["one", "two"]).unwrap();
        assert_eq!(split_path_list(&joined), bufs(&["one", "two"]));
    }

    #[test]
    fn test_discard_keeps_first_occurrence_order() {
        let kept = discard_empty_and_duplicates(bufs(&["b", "a", "b", "c", "a"]));
        assert_eq!(kept, bufs(&["b", "a", "c"]));
    }

    #[test]
    fn test_discard_drops_empty_entries() {
        let kept = discard_empty_and_duplicates(bufs(&["", "", "x", ""]));
        assert_eq!(kept, bufs(&["x"]));
    }

    #[test]
    fn test_discard_all_empty_yields_nothing() {
        assert!(discard_empty_and_duplicates(bufs(&["", ""])).is_empty());
        assert!(discard_empty_and_duplicates(Vec::new()).is_empty());
    }

    #[test]
    fn test_discard_compares_raw_strings() {
        let kept = discard_empty_and_duplicates(bufs(&["a/b", "a//b", "a/b/"]));
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn test_default_kubeconfig_path() {
        let path = default_kubeconfig_path(Some(Path::new("/home/someone")));
        assert_eq!(path, Path::new("/home/someone").join(".kube").join("config"));
    }

    #[test]
    fn test_default_kubeconfig_path_without_home() {
        let path = default_kubeconfig_path(None);
        assert_eq!(path, Path::new(".kube").join("config"));
    }

    #[test]
    fn test_file_exists_regular_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("config");
        fs::write(&file, "apiVersion: v1\n").unwrap();
        assert!(file_exists(&file));
    }

    #[test]
    fn test_file_exists_directory_is_not_a_file() {
        let dir = tempdir().unwrap();
        assert!(!file_exists(dir.path()));
    }

    #[test]
    fn test_file_exists_missing() {
        let dir = tempdir().unwrap();
        assert!(!file_exists(&dir.path().join("missing")));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_exists_broken_symlink() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let link = dir.path().join("link");
        symlink(dir.path().join("target"), &link).unwrap();
        assert!(!file_exists(&link));
    }
}
