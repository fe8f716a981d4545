//!
//! The source language an option set is rendered for.
//!

///
/// The source language an option set is rendered for.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// The C language.
    C,
    /// The C++ language.
    Cpp,
}

impl std::str::FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "c" | "C" => Ok(Self::C),
            "c++" | "cpp" | "C++" => Ok(Self::Cpp),
            string => anyhow::bail!("Unknown language `{string}`. Supported languages: c, c++"),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::C => write!(f, "c"),
            Self::Cpp => write!(f, "c++"),
        }
    }
}
