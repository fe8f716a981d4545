//!
//! The option value encoding.
//!
//! Every option value is stored as a single character, so the persisted
//! options string has exactly one character per catalog entry.
//!

use super::CompilerOption;

/// The value-to-character alphabet.
pub const ALPHABET: [char; 28] = [
    '0', '1', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q',
    'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// The number of values an option may take.
pub const VALUE_COUNT: usize = ALPHABET.len();

///
/// Maps an option value to its character.
///
/// Values outside of the alphabet are encoded as `'0'`.
///
pub fn value_to_char(value: usize) -> char {
    ALPHABET.get(value).copied().unwrap_or('0')
}

///
/// Maps a character back to the option value.
///
pub fn char_to_value(character: char) -> usize {
    match character {
        '1' => 1,
        'a'..='z' => (character as usize - 'a' as usize) + 2,
        _ => 0,
    }
}

///
/// Encodes the option values in catalog order.
///
pub fn encode(options: &[CompilerOption]) -> String {
    options
        .iter()
        .map(|option| value_to_char(option.value))
        .collect()
}

///
/// Decodes the option values positionally.
///
/// Options beyond the end of `encoded` are reset to 0, and characters beyond
/// the end of `options` are ignored.
///
pub fn decode(options: &mut [CompilerOption], encoded: &str) {
    let mut characters = encoded.chars();
    for option in options.iter_mut() {
        let value = characters.next().map(char_to_value).unwrap_or_default();
        option.set_value(value);
    }
}
