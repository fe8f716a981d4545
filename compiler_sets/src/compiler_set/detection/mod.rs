//!
//! The compiler set detection.
//!

pub mod parser;
pub mod report;


use std::path::Path;
use std::path::PathBuf;

use crate::compiler_set::directories::add_existing_directory;
use crate::compiler_set::directories::Layout;
use crate::compiler_set::program;
use crate::compiler_set::CompilerSet;
use crate::runner::Runner;

use self::report::Report;

impl CompilerSet {
    /// The binary directory name inside a toolchain root.
    pub const BIN_DIRECTORY: &'static str = "bin";

    ///
    /// Detects the toolchain installed in `folder`.
    ///
    /// The folder must contain a `bin` directory with the C compiler driver
    /// printing its target. Otherwise, the detection stops early, and the
    /// report says so.
    ///
    pub fn from_folder(folder: &Path, runner: &dyn Runner) -> (Self, Report) {
        let mut set = Self::default();
        let mut report = Report::default();

        let bin_directory = folder.join(Self::BIN_DIRECTORY);
        set.detect_properties(bin_directory.as_path(), runner, &mut report);
        if !report.is_recognized() {
            return (set, report);
        }

        set.add_conventional_directories(folder);
        set.find_executables();
        set.reset_user_input();
        report.defines_found = set.detect_defines(runner);

        (set, report)
    }

    ///
    /// Reads the predefined macros from the live compiler, replacing the list.
    ///
    /// The C++ compiler is preferred, and the C compiler driver is used if the
    /// former has not been found. Returns whether any macro has been read.
    ///
    pub fn detect_defines(&mut self, runner: &dyn Runner) -> bool {
        let compiler = if self.cpp_compiler.as_os_str().is_empty() {
            self.c_compiler.as_path()
        } else {
            self.cpp_compiler.as_path()
        };
        if compiler.as_os_str().is_empty() {
            self.defines.clear();
            return false;
        }

        let working_directory = compiler.parent().unwrap_or(compiler);
        let output = compiler_output(
            runner,
            compiler,
            working_directory,
            &["-dM", "-E", "-x", "c++", "-std=c++17", program::NULL_FILE],
        );
        self.defines = parser::parse_defines(output.as_str());
        !self.defines.is_empty()
    }

    ///
    /// Queries the compiler driver for the identity and the search directories.
    ///
    fn detect_properties(&mut self, bin_directory: &Path, runner: &dyn Runner, report: &mut Report) {
        let compiler = bin_directory.join(program::file_name(program::GCC));
        if !compiler.is_file() {
            return;
        }
        report.compiler_found = true;

        let output = compiler_output(runner, compiler.as_path(), bin_directory, &["-v"]);
        let version_output = match parser::parse_version_output(output.as_str()) {
            Some(version_output) => version_output,
            None => return,
        };
        report.target_found = true;
        self.target = version_output.target;
        if let Some(version) = version_output.version {
            report.version_found = true;
            self.version = version;
            self.build_type = version_output.build_type;
            if self.name.is_empty() {
                self.name = parser::build_name(self.build_type.as_str(), self.version.as_str());
            }
        }

        let root = bin_directory
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| bin_directory.to_path_buf());

        self.dump_machine =
            compiler_output(runner, compiler.as_path(), bin_directory, &["-dumpmachine"]);
        report.dump_machine_found = !self.dump_machine.is_empty();

        add_existing_directory(&mut self.bin_dirs, root.join("bin").as_path());
        add_existing_directory(&mut self.lib_dirs, root.join("lib").as_path());
        add_existing_directory(&mut self.c_include_dirs, root.join("include").as_path());
        add_existing_directory(&mut self.cpp_include_dirs, root.join("include").as_path());

        let output = compiler_output(
            runner,
            compiler.as_path(),
            bin_directory,
            &["-xc", "-v", "-E", program::NULL_FILE],
        );
        if let Some(directories) = parser::parse_search_directories(output.as_str()) {
            report.c_includes_found = true;
            add_existing_directories(&mut self.c_include_dirs, directories);
        }
        add_existing_directories(
            &mut self.bin_dirs,
            parser::parse_path_variable(output.as_str(), parser::COMPILER_PATH_VARIABLE),
        );
        add_existing_directories(
            &mut self.lib_dirs,
            parser::parse_path_variable(output.as_str(), parser::LIBRARY_PATH_VARIABLE),
        );

        let output = compiler_output(
            runner,
            compiler.as_path(),
            bin_directory,
            &["-xc++", "-E", "-v", program::NULL_FILE],
        );
        if let Some(directories) = parser::parse_search_directories(output.as_str()) {
            report.cpp_includes_found = true;
            add_existing_directories(&mut self.cpp_include_dirs, directories);
        }
    }

    ///
    /// Registers the existing directories of the known toolchain layouts.
    ///
    fn add_conventional_directories(&mut self, root: &Path) {
        if self.dump_machine.is_empty() || self.version.is_empty() {
            return;
        }

        let layout = Layout::new(root, self.dump_machine.as_str(), self.version.as_str());
        for directory in layout.bin.iter() {
            add_existing_directory(&mut self.bin_dirs, directory);
        }
        for directory in layout.c_include.iter() {
            add_existing_directory(&mut self.c_include_dirs, directory);
        }
        for directory in layout.cpp_include.iter() {
            add_existing_directory(&mut self.cpp_include_dirs, directory);
        }
    }

    ///
    /// Locates the toolchain executables in the binary directories.
    ///
    fn find_executables(&mut self) {
        self.c_compiler = self.find_program(program::GCC);
        self.cpp_compiler = self.find_program(program::GPP);
        self.debugger = self.find_program(program::GDB);
        self.make = self.find_program(program::MAKE);
        self.resource_compiler = self.find_program(program::WINDRES);
        self.profiler = self.find_program(program::GPROF);
    }

    ///
    /// Returns the first executable with the name in the binary directories,
    /// or an empty path.
    ///
    fn find_program(&self, name: &str) -> PathBuf {
        for directory in self.bin_dirs.iter() {
            if let Ok(path) = which::which_in(name, Some(directory), directory) {
                if let Ok(path) = std::path::absolute(path) {
                    return path;
                }
            }
        }
        PathBuf::new()
    }

    ///
    /// Resets the user-editable settings of a freshly detected set.
    ///
    fn reset_user_input(&mut self) {
        self.use_custom_compile_params = false;
        self.use_custom_link_params = false;
        self.static_link = true;
        self.auto_add_charset_params = true;
    }
}

///
/// Runs the program and returns its trimmed output.
///
/// A failed run yields an empty output, which the parsers treat as a missing
/// marker.
///
fn compiler_output(
    runner: &dyn Runner,
    program: &Path,
    working_directory: &Path,
    arguments: &[&str],
) -> String {
    match runner.run_and_get_output(program, working_directory, arguments) {
        Ok(output) => String::from_utf8_lossy(output.as_slice()).trim().to_owned(),
        Err(_) => String::new(),
    }
}

///
/// Appends every existing directory of the list.
///
fn add_existing_directories(list: &mut Vec<PathBuf>, directories: Vec<String>) {
    for directory in directories.into_iter() {
        add_existing_directory(list, Path::new(directory.as_str()));
    }
}
