//!
//! The compiler set preset.
//!

use crate::compiler_set::CompilerSet;
use crate::options::catalog;

///
/// The compiler set preset.
///
/// Each preset is derived from a freshly detected set by switching on a few options.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// The optimized and stripped build.
    Release,
    /// The build with debug information and extra warnings.
    Debug,
    /// The build instrumented for `gprof`.
    Profiling,
}

impl Preset {
    /// The presets in the order they are appended to the collection.
    pub const ALL: [Self; 3] = [Self::Release, Self::Debug, Self::Profiling];

    ///
    /// Derives the preset from the base set.
    ///
    /// The base set is left untouched.
    ///
    pub fn derive(self, base: &CompilerSet) -> CompilerSet {
        let mut set = base.clone();
        set.name = format!("{} {} {}", base.name, base.platform_name(), self);
        match self {
            Self::Release => {
                set.set_option_value(catalog::OPTIMIZATION, catalog::OPTIMIZATION_MEDIUM);
                set.set_option_value(catalog::STRIP, 1);
            }
            Self::Debug => {
                set.set_option_value(catalog::DEBUG_INFO, 1);
                set.set_option_value(catalog::WARNINGS_ALL, 1);
                set.set_option_value(catalog::WARNINGS_EXTRA, 1);
            }
            Self::Profiling => {
                set.set_option_value(catalog::PROFILING, 1);
            }
        }
        set
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Release => write!(f, "Release"),
            Self::Debug => write!(f, "Debug"),
            Self::Profiling => write!(f, "Profiling"),
        }
    }
}
