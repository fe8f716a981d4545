//!
//! The detection report.
//!

///
/// The detection report.
///
/// Detection never fails as a whole, so the report tells a fully detected
/// toolchain from a partially detected or absent one.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    /// The C compiler driver exists in the `bin` directory.
    pub compiler_found: bool,
    /// The `-v` output contains the target.
    pub target_found: bool,
    /// The `-v` output contains the version.
    pub version_found: bool,
    /// `-dumpmachine` printed the machine triple.
    pub dump_machine_found: bool,
    /// The C include search list has been found.
    pub c_includes_found: bool,
    /// The C++ include search list has been found.
    pub cpp_includes_found: bool,
    /// The predefined macros have been read.
    pub defines_found: bool,
}

impl Report {
    ///
    /// Whether every detection step has succeeded.
    ///
    pub fn is_complete(&self) -> bool {
        self.compiler_found
            && self.target_found
            && self.version_found
            && self.dump_machine_found
            && self.c_includes_found
            && self.cpp_includes_found
            && self.defines_found
    }

    ///
    /// Whether the toolchain has been recognized at all.
    ///
    pub fn is_recognized(&self) -> bool {
        self.compiler_found && self.target_found
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let steps = [
            ("compiler", self.compiler_found),
            ("target", self.target_found),
            ("version", self.version_found),
            ("machine", self.dump_machine_found),
            ("C includes", self.c_includes_found),
            ("C++ includes", self.cpp_includes_found),
            ("defines", self.defines_found),
        ];
        for (index, (name, found)) in steps.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name} {}", if *found { "+" } else { "-" })?;
        }
        Ok(())
    }
}
