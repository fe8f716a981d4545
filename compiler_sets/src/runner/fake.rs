//!
//! The canned-output runner for tests.
//!

use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;

use super::Runner;

///
/// The canned-output runner for tests.
///
/// Outputs are keyed by the space-joined argument list. Outputs registered for
/// a specific program take precedence.
///
#[derive(Debug, Default)]
pub struct FakeRunner {
    /// The outputs by arguments.
    outputs: HashMap<String, String>,
    /// The programs run so far, with their arguments.
    calls: Mutex<Vec<(PathBuf, String)>>,
}

impl FakeRunner {
    ///
    /// Adds the output printed for the arguments.
    ///
    pub fn with_output(mut self, arguments: &[&str], output: &str) -> Self {
        self.outputs.insert(arguments.join(" "), output.to_owned());
        self
    }

    ///
    /// Adds the output printed by the program for the arguments.
    ///
    pub fn with_program_output(mut self, program: &Path, arguments: &[&str], output: &str) -> Self {
        self.outputs.insert(
            Self::program_key(program, arguments.join(" ").as_str()),
            output.to_owned(),
        );
        self
    }

    ///
    /// Returns the programs run so far, with their arguments.
    ///
    pub fn calls(&self) -> Vec<(PathBuf, String)> {
        self.calls.lock().expect("Sync").clone()
    }

    ///
    /// Returns the key of a program-specific output.
    ///
    fn program_key(program: &Path, arguments: &str) -> String {
        format!("{} {arguments}", program.to_string_lossy())
    }
}

impl Runner for FakeRunner {
    fn run_and_get_output(
        &self,
        program: &Path,
        _working_directory: &Path,
        arguments: &[&str],
    ) -> anyhow::Result<Vec<u8>> {
        let arguments = arguments.join(" ");
        self.calls
            .lock()
            .expect("Sync")
            .push((program.to_path_buf(), arguments.clone()));
        match self
            .outputs
            .get(Self::program_key(program, arguments.as_str()).as_str())
            .or_else(|| self.outputs.get(arguments.as_str()))
        {
            Some(output) => Ok(output.as_bytes().to_vec()),
            None => anyhow::bail!("{program:?} has no output for `{arguments}`"),
        }
    }
}
