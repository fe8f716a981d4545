//!
//! The compiler sets arguments.
//!

pub mod validation;


use std::path::PathBuf;

use clap::Parser;

///
/// The compiler sets arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Prints the detection report of every install folder.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppresses the status output.
    #[arg(short, long)]
    pub quiet: bool,

    /// The application directory the install folders and portable paths are relative to.
    /// Is set to the directory of this executable by default.
    #[arg(long)]
    pub app_directory: Option<PathBuf>,

    /// The JSON settings file.
    /// Is set to `<app-directory>/compiler-sets.json` by default.
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    /// The JSON detection config with the install folders and the timeout.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Replaces the saved compiler sets with the detected ones.
    #[arg(short, long)]
    pub detect: bool,

    /// Lists the compiler sets. This is the default action.
    #[arg(short, long)]
    pub list: bool,

    /// Prints the compiler set with the index.
    #[arg(long)]
    pub show: Option<usize>,

    /// Restricts the compile flags printed by `--show` to one language.
    /// Available arguments: `c`, `c++`.
    #[arg(long)]
    pub language: Option<compiler_sets::Language>,

    /// Deletes the compiler set with the index.
    #[arg(long)]
    pub delete: Option<usize>,

    /// Selects the default compiler set.
    #[arg(long)]
    pub default: Option<usize>,

    /// The compiler invocation timeout in seconds, overriding the config.
    #[arg(short, long)]
    pub timeout: Option<u64>,
}

impl Arguments {
    ///
    /// Validate the arguments passed from user, checking invariants that are not
    /// expressed in the type system.
    ///
    pub fn validate(arguments: Self) -> anyhow::Result<Self> {
        validation::validate_arguments(arguments)
    }

    ///
    /// Whether an action changing the settings is requested.
    ///
    pub fn is_mutating(&self) -> bool {
        self.mutating_actions() > 0
    }

    ///
    /// The number of requested actions changing the settings.
    ///
    pub fn mutating_actions(&self) -> usize {
        [self.detect, self.delete.is_some(), self.default.is_some()]
            .into_iter()
            .filter(|requested| *requested)
            .count()
    }
}
