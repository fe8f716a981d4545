//!
//! The compiler option.
//!

pub mod catalog;
pub mod encoding;
pub mod language;


use self::language::Language;

///
/// The compiler option.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerOption {
    /// The human-readable name.
    pub name: String,
    /// The section the option is shown in.
    pub section: String,
    /// Whether the option is passed when compiling C sources.
    pub is_c: bool,
    /// Whether the option is passed when compiling C++ sources.
    pub is_cpp: bool,
    /// Whether the option is passed to the linker.
    pub is_linker: bool,
    /// The selected value, an index into `choices`, or 0/1 for a switch.
    pub value: usize,
    /// The option identifier and the flag prefix.
    pub setting: String,
    /// The `label=suffix` choices. Empty for a switch.
    pub choices: Vec<String>,
}

impl CompilerOption {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        name: &str,
        section: &str,
        is_c: bool,
        is_cpp: bool,
        is_linker: bool,
        setting: &str,
        choices: &[&str],
    ) -> Self {
        Self {
            name: name.to_owned(),
            section: section.to_owned(),
            is_c,
            is_cpp,
            is_linker,
            value: 0,
            setting: setting.to_owned(),
            choices: choices.iter().map(|choice| (*choice).to_owned()).collect(),
        }
    }

    ///
    /// Whether the option is an on/off switch.
    ///
    pub fn is_switch(&self) -> bool {
        self.choices.is_empty()
    }

    ///
    /// The number of values the option accepts.
    ///
    pub fn value_count(&self) -> usize {
        if self.is_switch() {
            2
        } else {
            self.choices.len()
        }
    }

    ///
    /// Sets the value, falling back to 0 if it is out of range.
    ///
    pub fn set_value(&mut self, value: usize) {
        self.value = if value < self.value_count() { value } else { 0 };
    }

    ///
    /// Returns the label of the selected choice.
    ///
    pub fn selected_label(&self) -> Option<&str> {
        self.selected_choice().map(|(label, _)| label)
    }

    ///
    /// Renders the flag for the selected value, if the option is enabled.
    ///
    pub fn argument(&self) -> Option<String> {
        if self.value == 0 {
            return None;
        }
        if self.is_switch() {
            return Some(self.setting.clone());
        }
        let (_, suffix) = self.selected_choice()?;
        Some(format!("{}{}", self.setting, suffix))
    }

    ///
    /// Whether the option is passed when compiling the specified language.
    ///
    pub fn applies_to(&self, language: Language) -> bool {
        match language {
            Language::C => self.is_c,
            Language::Cpp => self.is_cpp,
        }
    }

    ///
    /// Splits the selected `label=suffix` choice.
    ///
    fn selected_choice(&self) -> Option<(&str, &str)> {
        let choice = self.choices.get(self.value)?;
        Some(choice.split_once('=').unwrap_or((choice.as_str(), "")))
    }
}
