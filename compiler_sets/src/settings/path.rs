//!
//! The portable path conversion.
//!

use std::path::Path;
use std::path::PathBuf;

/// The macro standing for the application directory in persisted paths.
pub const APP_PATH_MACRO: &str = "%AppPath%/";

///
/// Converts the path into its persisted form.
///
/// Paths under the application directory are rewritten relative to `%AppPath%/`.
/// The prefix is matched case-insensitively with both `/` and the native separator.
///
pub fn to_portable(path: &Path, app_directory: &Path) -> String {
    let path = path.to_string_lossy();
    let app_directory = app_directory.to_string_lossy();
    let app_directory = app_directory.trim_end_matches(['/', std::path::MAIN_SEPARATOR]);
    if app_directory.is_empty() {
        return path.into_owned();
    }

    for separator in ['/', std::path::MAIN_SEPARATOR] {
        let prefix = format!("{app_directory}{separator}");
        if starts_with_ignore_case(&path, prefix.as_str()) {
            return format!("{APP_PATH_MACRO}{}", &path[prefix.len()..]);
        }
    }
    path.into_owned()
}

///
/// Converts the persisted form back into an absolute path.
///
/// An empty string stays an empty path.
///
pub fn from_portable(value: &str, app_directory: &Path) -> PathBuf {
    if value.is_empty() {
        return PathBuf::new();
    }

    let path = match value.strip_prefix(APP_PATH_MACRO) {
        Some(relative) => app_directory.join(relative),
        None => PathBuf::from(value),
    };
    std::path::absolute(path.as_path()).unwrap_or(path)
}

///
/// ASCII case-insensitive `starts_with`.
///
fn starts_with_ignore_case(string: &str, prefix: &str) -> bool {
    string.len() >= prefix.len()
        && string.is_char_boundary(prefix.len())
        && string[..prefix.len()].eq_ignore_ascii_case(prefix)
}
