//!
//! The subprocess runner.
//!

#[cfg(test)]
pub mod fake;
pub mod process;
#[cfg(all(test, unix))]
mod tests;

use std::path::Path;

///
/// The subprocess runner.
///
/// Implementors must return the captured standard output followed by the
/// standard error, since compiler drivers print their diagnostics to the latter.
///
pub trait Runner: Send + Sync {
    ///
    /// Runs `program` in `working_directory` and returns its combined output.
    ///
    fn run_and_get_output(
        &self,
        program: &Path,
        working_directory: &Path,
        arguments: &[&str],
    ) -> anyhow::Result<Vec<u8>>;
}
