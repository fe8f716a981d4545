//!
//! The search directory lists.
//!

use std::path::Path;
use std::path::PathBuf;

///
/// Appends the directory if it exists and is not listed yet.
///
/// Returns whether the directory has been added.
///
pub fn add_existing_directory(directories: &mut Vec<PathBuf>, directory: &Path) -> bool {
    if !directory.is_dir() {
        return false;
    }
    let directory = match std::path::absolute(directory) {
        Ok(directory) => directory,
        Err(_) => return false,
    };
    if directories.contains(&directory) {
        return false;
    }
    directories.push(directory);
    true
}

///
/// The conventional toolchain layout candidates.
///
/// Covers the mingw-w64, mingw.org, and GCC-internal layouts at once, as only
/// the existing ones are registered.
///
#[derive(Debug, Default)]
pub struct Layout {
    /// The binary directory candidates.
    pub bin: Vec<PathBuf>,
    /// The C include directory candidates.
    pub c_include: Vec<PathBuf>,
    /// The C++ include directory candidates.
    pub cpp_include: Vec<PathBuf>,
}

impl Layout {
    ///
    /// Builds the candidates for the toolchain root, machine triple, and version.
    ///
    pub fn new(root: &Path, dump_machine: &str, version: &str) -> Self {
        let gcc = root.join("lib").join("gcc").join(dump_machine).join(version);
        let gcc_include = gcc.join("include");
        let gcc_cpp = gcc_include.join("c++");
        let mingw_w64_cpp = root.join("include").join("c++").join(version);

        let shared = vec![
            root.join(dump_machine).join("include"),
            gcc_include.clone(),
            gcc.join("include-fixed"),
        ];

        let mut cpp_include = shared.clone();
        cpp_include.extend([
            gcc_cpp.clone(),
            gcc_cpp.join(dump_machine),
            gcc_cpp.join("backward"),
            mingw_w64_cpp.clone(),
            mingw_w64_cpp.join(dump_machine),
            mingw_w64_cpp.join("backward"),
        ]);

        Self {
            bin: vec![gcc],
            c_include: shared,
            cpp_include,
        }
    }
}
