//!
//! The toolchain program names.
//!

use std::path::Path;

/// The C compiler driver.
pub const GCC: &str = "gcc";

/// The C++ compiler driver.
pub const GPP: &str = "g++";

/// The debugger.
pub const GDB: &str = "gdb";

/// The make tool.
pub const MAKE: &str = if cfg!(windows) { "mingw32-make" } else { "make" };

/// The resource compiler.
pub const WINDRES: &str = "windres";

/// The profiler.
pub const GPROF: &str = "gprof";

/// The null device passed to the preprocessor.
pub const NULL_FILE: &str = if cfg!(windows) { "NUL" } else { "/dev/null" };

/// The separator of `COMPILER_PATH` and `LIBRARY_PATH` entries.
pub const PATH_LIST_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

///
/// Returns the platform file name of the program.
///
pub fn file_name(program: &str) -> String {
    format!("{program}{}", std::env::consts::EXE_SUFFIX)
}

///
/// Whether the path is an executable file.
///
pub fn is_executable(path: &Path) -> bool {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(_) => return false,
    };
    if !metadata.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    {
        true
    }
}
