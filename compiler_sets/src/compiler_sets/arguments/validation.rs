//!
//! Validate the arguments passed from user, checking invariants that are not
//! expressed in the type system.
//!

use super::Arguments;

///
/// Validate the arguments passed from user, checking invariants that are not
/// expressed in the type system.
///
pub fn validate_arguments(arguments: Arguments) -> anyhow::Result<Arguments> {
    if arguments.verbose && arguments.quiet {
        anyhow::bail!("The `--verbose` and `--quiet` arguments cannot be used together.");
    }

    if arguments.mutating_actions() > 1 {
        anyhow::bail!(
            "Only one of the `--detect`, `--delete`, and `--default` arguments can be used at a time."
        );
    }

    if arguments.language.is_some() && arguments.show.is_none() {
        anyhow::bail!("The `--language` argument requires `--show`.");
    }

    if let Some(0) = arguments.timeout {
        anyhow::bail!("The `--timeout` argument must be positive.");
    }

    Ok(arguments)
}
