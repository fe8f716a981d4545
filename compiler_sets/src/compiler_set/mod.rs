//!
//! The compiler set.
//!

pub mod detection;
pub mod directories;
#[cfg(test)]
pub mod fixture;
pub mod persistence;
pub mod program;


use std::path::PathBuf;

use itertools::Itertools;

use crate::options::catalog;
use crate::options::encoding;
use crate::options::language::Language;
use crate::options::CompilerOption;

///
/// The compiler set.
///
/// Describes one installed toolchain: its executables, search directories,
/// identity, and the selected option values.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerSet {
    /// The C compiler driver.
    pub c_compiler: PathBuf,
    /// The C++ compiler driver.
    pub cpp_compiler: PathBuf,
    /// The make tool.
    pub make: PathBuf,
    /// The debugger.
    pub debugger: PathBuf,
    /// The profiler.
    pub profiler: PathBuf,
    /// The resource compiler.
    pub resource_compiler: PathBuf,

    /// The binary directories.
    pub bin_dirs: Vec<PathBuf>,
    /// The C include directories.
    pub c_include_dirs: Vec<PathBuf>,
    /// The C++ include directories.
    pub cpp_include_dirs: Vec<PathBuf>,
    /// The library directories.
    pub lib_dirs: Vec<PathBuf>,

    /// The machine triple printed by `-dumpmachine`.
    pub dump_machine: String,
    /// The compiler version.
    pub version: String,
    /// The build tag, usually the distribution.
    pub build_type: String,
    /// The human-readable name.
    pub name: String,
    /// The normalized target, either `x86_64` or `i686`.
    pub target: String,

    /// The predefined macros of the compiler.
    pub defines: Vec<String>,

    /// Whether the custom compile parameters are passed.
    pub use_custom_compile_params: bool,
    /// The custom compile parameters.
    pub custom_compile_params: String,
    /// Whether the custom link parameters are passed.
    pub use_custom_link_params: bool,
    /// The custom link parameters.
    pub custom_link_params: String,
    /// Whether executables are linked statically.
    pub static_link: bool,
    /// Whether the charset parameters are added automatically.
    pub auto_add_charset_params: bool,

    /// The options in catalog order.
    options: Vec<CompilerOption>,
}

impl Default for CompilerSet {
    fn default() -> Self {
        Self {
            c_compiler: PathBuf::new(),
            cpp_compiler: PathBuf::new(),
            make: PathBuf::new(),
            debugger: PathBuf::new(),
            profiler: PathBuf::new(),
            resource_compiler: PathBuf::new(),

            bin_dirs: Vec::new(),
            c_include_dirs: Vec::new(),
            cpp_include_dirs: Vec::new(),
            lib_dirs: Vec::new(),

            dump_machine: String::new(),
            version: String::new(),
            build_type: String::new(),
            name: String::new(),
            target: String::new(),

            defines: Vec::new(),

            use_custom_compile_params: false,
            custom_compile_params: String::new(),
            use_custom_link_params: false,
            custom_link_params: String::new(),
            static_link: true,
            auto_add_charset_params: true,

            options: catalog::options(),
        }
    }
}

impl CompilerSet {
    ///
    /// Creates an empty set, which is later filled from the settings.
    ///
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// The options in catalog order.
    ///
    pub fn options(&self) -> &[CompilerOption] {
        self.options.as_slice()
    }

    ///
    /// Finds the option by its setting.
    ///
    pub fn option(&self, setting: &str) -> Option<&CompilerOption> {
        self.options.iter().find(|option| option.setting == setting)
    }

    ///
    /// Returns the encoded value of the option, or `'0'` if there is no such option.
    ///
    pub fn option_char(&self, setting: &str) -> char {
        self.option(setting)
            .map(|option| encoding::value_to_char(option.value))
            .unwrap_or('0')
    }

    ///
    /// Sets the option value from its encoded character.
    ///
    /// Returns `false` if there is no such option.
    ///
    pub fn set_option_char(&mut self, setting: &str, character: char) -> bool {
        self.set_option_value(setting, encoding::char_to_value(character))
    }

    ///
    /// Sets the option value.
    ///
    /// Returns `false` if there is no such option.
    ///
    pub fn set_option_value(&mut self, setting: &str, value: usize) -> bool {
        match self
            .options
            .iter_mut()
            .find(|option| option.setting == setting)
        {
            Some(option) => {
                option.set_value(value);
                true
            }
            None => false,
        }
    }

    ///
    /// Encodes the option values, one character per option.
    ///
    pub fn options_string(&self) -> String {
        encoding::encode(self.options.as_slice())
    }

    ///
    /// Decodes the option values saved by `options_string`.
    ///
    pub fn set_options_string(&mut self, encoded: &str) {
        encoding::decode(self.options.as_mut_slice(), encoded);
    }

    ///
    /// The platform name derived from the target.
    ///
    pub fn platform_name(&self) -> &'static str {
        if self.target == detection::parser::TARGET_X86_64 {
            "64-bit"
        } else {
            "32-bit"
        }
    }

    ///
    /// Returns the flags passed when compiling the language.
    ///
    pub fn compile_arguments(&self, language: Language) -> Vec<String> {
        let mut arguments: Vec<String> = self
            .options
            .iter()
            .filter(|option| option.applies_to(language))
            .filter_map(CompilerOption::argument)
            .collect();
        if self.use_custom_compile_params {
            arguments.extend(
                self.custom_compile_params
                    .split_whitespace()
                    .map(str::to_owned),
            );
        }
        arguments
    }

    ///
    /// Returns the flags passed to the linker.
    ///
    pub fn link_arguments(&self) -> Vec<String> {
        let mut arguments: Vec<String> = self
            .options
            .iter()
            .filter(|option| option.is_linker)
            .filter_map(CompilerOption::argument)
            .collect();
        if self.static_link {
            arguments.push("-static".to_owned());
        }
        if self.use_custom_link_params {
            arguments.extend(self.custom_link_params.split_whitespace().map(str::to_owned));
        }
        arguments
    }

    ///
    /// Checks that the set is usable.
    ///
    /// The C compiler, the C++ compiler, and the make tool must be executable
    /// files, and every listed directory must exist.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        let mut problems = Vec::new();

        for (name, path) in [
            ("C compiler", self.c_compiler.as_path()),
            ("C++ compiler", self.cpp_compiler.as_path()),
            ("make", self.make.as_path()),
        ] {
            if path.as_os_str().is_empty() {
                problems.push(format!("{name} is not set"));
            } else if !program::is_executable(path) {
                problems.push(format!("{name} {path:?} is not an executable file"));
            }
        }

        for (name, directories) in [
            ("binary", &self.bin_dirs),
            ("C include", &self.c_include_dirs),
            ("C++ include", &self.cpp_include_dirs),
            ("library", &self.lib_dirs),
        ] {
            problems.extend(
                directories
                    .iter()
                    .filter(|directory| !directory.is_dir())
                    .map(|directory| format!("{name} directory {directory:?} does not exist")),
            );
        }

        if !problems.is_empty() {
            anyhow::bail!(
                "Compiler set `{}` is invalid:\n{}",
                self.name,
                problems.iter().join("\n")
            );
        }
        Ok(())
    }
}
