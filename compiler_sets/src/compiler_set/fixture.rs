//!
//! The fake toolchain used by tests.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::compiler_set::program;
use crate::runner::fake::FakeRunner;

/// The machine triple of the fake toolchain.
pub const DUMP_MACHINE: &str = "x86_64-w64-mingw32";

/// The version of the fake toolchain.
pub const VERSION: &str = "11.2.0";

/// The `-v` output of the fake toolchain.
pub const VERSION_OUTPUT: &str = "Using built-in specs.
COLLECT_GCC=gcc
Target: x86_64-w64-mingw32
Configured with: ../../../src/gcc-11.2.0/configure --host=x86_64-w64-mingw32
Thread model: posix
Supported LTO compression algorithms: zlib
gcc version 11.2.0 (x86_64-posix-seh-rev1, Built by MinGW-W64 project)
";

/// The predefined macros of the fake toolchain.
pub const DEFINES_OUTPUT: &str = "#define __GNUC__ 11
#define __x86_64__ 1

#define __cplusplus 201703L
";

///
/// The fake toolchain installed on disk.
///
pub struct Toolchain {
    /// The toolchain root.
    pub root: PathBuf,
}

impl Toolchain {
    ///
    /// Creates the toolchain layout with executable stubs under `root`.
    ///
    pub fn create(root: &Path) -> Self {
        let bin = root.join("bin");
        std::fs::create_dir_all(&bin).expect("Always valid");
        for name in [
            program::GCC,
            program::GPP,
            program::GDB,
            program::MAKE,
            program::GPROF,
        ] {
            let path = bin.join(program::file_name(name));
            std::fs::write(&path, b"#!/bin/sh\n").expect("Always valid");
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
                    .expect("Always valid");
            }
        }

        let toolchain = Self {
            root: root.to_path_buf(),
        };
        for directory in [
            toolchain.root.join("lib"),
            toolchain.root.join("include"),
            toolchain.gcc_directory().join("include"),
            toolchain.gcc_directory().join("include-fixed"),
            toolchain.root.join("include").join("c++").join(VERSION),
            toolchain.root.join(DUMP_MACHINE).join("include"),
        ] {
            std::fs::create_dir_all(directory).expect("Always valid");
        }
        toolchain
    }

    ///
    /// The GCC-internal directory.
    ///
    pub fn gcc_directory(&self) -> PathBuf {
        self.root.join("lib").join("gcc").join(DUMP_MACHINE).join(VERSION)
    }

    ///
    /// The C compiler driver.
    ///
    pub fn gcc(&self) -> PathBuf {
        self.root.join("bin").join(program::file_name(program::GCC))
    }

    ///
    /// The C++ compiler driver.
    ///
    pub fn gpp(&self) -> PathBuf {
        self.root.join("bin").join(program::file_name(program::GPP))
    }

    ///
    /// The `-xc -v -E` output listing two existing and one missing directory.
    ///
    pub fn c_search_output(&self) -> String {
        format!(
            "#include \"...\" search starts here:
#include <...> search starts here:
 {}
 {}
 {}
End of search list.
COMPILER_PATH={}{separator}{}
LIBRARY_PATH={}{separator}{}
",
            self.gcc_directory().join("include").display(),
            self.root.join("missing").display(),
            self.root.join("include").display(),
            self.gcc_directory().display(),
            self.root.join("libexec").display(),
            self.gcc_directory().display(),
            self.root.join("lib").display(),
            separator = program::PATH_LIST_SEPARATOR,
        )
    }

    ///
    /// The `-xc++ -E -v` output.
    ///
    pub fn cpp_search_output(&self) -> String {
        format!(
            "#include <...> search starts here:
 {}
 {}
End of search list.
",
            self.root.join("include").join("c++").join(VERSION).display(),
            self.gcc_directory().join("include").display(),
        )
    }

    ///
    /// Returns a runner printing this toolchain's outputs.
    ///
    pub fn runner(&self) -> FakeRunner {
        self.register(FakeRunner::default())
    }

    ///
    /// Registers this toolchain's outputs in the runner.
    ///
    pub fn register(&self, runner: FakeRunner) -> FakeRunner {
        let gcc = self.gcc();
        let c_search_output = self.c_search_output();
        let cpp_search_output = self.cpp_search_output();
        runner
            .with_program_output(gcc.as_path(), &["-v"], VERSION_OUTPUT)
            .with_program_output(gcc.as_path(), &["-dumpmachine"], "x86_64-w64-mingw32\n")
            .with_program_output(
                gcc.as_path(),
                &["-xc", "-v", "-E", program::NULL_FILE],
                c_search_output.as_str(),
            )
            .with_program_output(
                gcc.as_path(),
                &["-xc++", "-E", "-v", program::NULL_FILE],
                cpp_search_output.as_str(),
            )
            .with_program_output(
                self.gpp().as_path(),
                &["-dM", "-E", "-x", "c++", "-std=c++17", program::NULL_FILE],
                DEFINES_OUTPUT,
            )
    }
}
