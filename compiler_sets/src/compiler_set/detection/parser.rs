//!
//! The compiler driver output parser.
//!
//! The functions here only inspect captured text, so every rule can be checked
//! against literal output samples.
//!

use crate::compiler_set::program::PATH_LIST_SEPARATOR;

/// The target triple marker of the `-v` output.
pub const TARGET_MARKER: &str = "Target: ";

/// The version marker of the `-v` output.
pub const VERSION_MARKER: &str = "gcc version ";

/// The include search list start marker of the `-v -E` output.
pub const SEARCH_START_MARKER: &str = "#include <...> search starts here:";

/// The include search list end marker of the `-v -E` output.
pub const SEARCH_END_MARKER: &str = "End of search list.";

/// The compiler programs search path variable.
pub const COMPILER_PATH_VARIABLE: &str = "COMPILER_PATH=";

/// The library search path variable.
pub const LIBRARY_PATH_VARIABLE: &str = "LIBRARY_PATH=";

/// The normalized 64-bit target.
pub const TARGET_X86_64: &str = "x86_64";

/// The normalized 32-bit target.
pub const TARGET_I686: &str = "i686";

///
/// The data extracted from the `-v` output.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionOutput {
    /// The normalized target, either `x86_64` or `i686`.
    pub target: String,
    /// The version, if the version marker is present.
    pub version: Option<String>,
    /// The build tag found in parentheses after the version.
    pub build_type: String,
}

///
/// Parses the `-v` output.
///
/// Returns `None` if there is no target marker, which means the binary is not
/// a recognized compiler driver.
///
pub fn parse_version_output(output: &str) -> Option<VersionOutput> {
    let target = value_after(output, TARGET_MARKER)?;
    let mut result = VersionOutput {
        target: normalize_target(target).to_owned(),
        ..VersionOutput::default()
    };

    if let Some(start) = output.find(VERSION_MARKER) {
        let start = start + VERSION_MARKER.len();
        let version = printable_prefix(&output[start..]);
        result.build_type = parse_build_type(&output[start + version.len()..]);
        result.version = Some(version.to_owned());
    }

    Some(result)
}

///
/// Maps a raw target triple to one of the two supported targets.
///
pub fn normalize_target(target: &str) -> &'static str {
    if target.contains(TARGET_X86_64) {
        TARGET_X86_64
    } else {
        TARGET_I686
    }
}

///
/// Extracts the text between the first `(` and the first `)` following it.
///
/// An unmatched parenthesis yields an empty tag.
///
pub fn parse_build_type(text: &str) -> String {
    let Some(open) = text.find('(') else {
        return String::new();
    };
    let rest = &text[open + 1..];
    match rest.find(')') {
        Some(close) => rest[..close].to_owned(),
        None => String::new(),
    }
}

///
/// Builds the human-readable toolchain name from the build tag.
///
pub fn build_name(build_type: &str, version: &str) -> String {
    let vendor = if build_type.contains("tdm") {
        "TDM-GCC"
    } else if build_type.contains("MSYS2") {
        "MinGW-w64 GCC"
    } else {
        "MinGW GCC"
    };
    format!("{vendor} {version}")
}

///
/// Extracts the include search list of the `-v -E` output.
///
pub fn parse_search_directories(output: &str) -> Option<Vec<String>> {
    let start = output.find(SEARCH_START_MARKER)? + SEARCH_START_MARKER.len();
    let end = output.find(SEARCH_END_MARKER)?;
    if end < start {
        return None;
    }
    Some(non_empty_lines(&output[start..end]))
}

///
/// Extracts the entries of a path list variable, such as `LIBRARY_PATH=`.
///
pub fn parse_path_variable(output: &str, variable: &str) -> Vec<String> {
    let Some(start) = output.find(variable) else {
        return Vec::new();
    };
    let value = &output[start + variable.len()..];
    let value = value.split('\n').next().unwrap_or_default();
    value
        .split(PATH_LIST_SEPARATOR)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}

///
/// Extracts the predefined macros of the `-dM -E` output.
///
pub fn parse_defines(output: &str) -> Vec<String> {
    non_empty_lines(output)
}

///
/// Returns the printable run following the marker.
///
fn value_after<'a>(output: &'a str, marker: &str) -> Option<&'a str> {
    let start = output.find(marker)? + marker.len();
    Some(printable_prefix(&output[start..]))
}

///
/// Returns the prefix up to the first control character or space.
///
fn printable_prefix(text: &str) -> &str {
    let end = text
        .char_indices()
        .find(|(_, character)| *character <= ' ')
        .map(|(index, _)| index)
        .unwrap_or(text.len());
    &text[..end]
}

///
/// Splits the text into trimmed non-empty lines.
///
fn non_empty_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
