//! Output symbol sets for derived passwords.
//!
//! Symbols are Unicode scalar values. Multi-code-point emoji therefore split
//! into their component scalars, and a few emoji appear twice in the
//! supplementary set; both quirks are kept as-is because changing them would
//! change every password derived with the emoji set enabled.

use std::collections::HashSet;

use crate::error::DeriveError;

/// Default 94-symbol ASCII set: lowercase, uppercase, digits, punctuation.
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+=-`~[]\\{}|;':\",./<>?";

/// Supplementary emoji symbols, appended to the default set when enabled.
pub const EMOJI_ALPHABET: &str = "😭😂🥺🤣❤️✨🙏😍🥰😊😘😲🚀💪💐🦋🤸🕳️🧩💬📸📍📥🎂🎈🎁🎟️🎫🏮🪔🌍🌏🌎🛡👍🎙️🔔🎖️🏆🥇🥈🥉🎲🧩🚦🌟📅🎉🙌🥳📱🤩🎇✨📓✏️🖋️🖊️🔖✍️👀🧷🔐";

/// An ordered set of output symbols.
///
/// The total symbol count (duplicates included) is the radix of the encoding;
/// validity only requires at least 2 distinct symbols. Duplicates bias which
/// symbols appear more often but do not break determinism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from a symbol string.
    ///
    /// # Errors
    ///
    /// Returns [`DeriveError::InvalidAlphabet`] if the string has fewer than
    /// 2 distinct symbols.
    pub fn new(symbols: &str) -> Result<Self, DeriveError> {
        let symbols: Vec<char> = symbols.chars().collect();
        let distinct = symbols.iter().collect::<HashSet<_>>().len();
        if distinct < 2 {
            return Err(DeriveError::InvalidAlphabet(distinct));
        }
        Ok(Self { symbols })
    }

    /// The default ASCII symbol set.
    pub fn ascii() -> Self {
        Self {
            symbols: DEFAULT_ALPHABET.chars().collect(),
        }
    }

    /// The default ASCII set followed by the emoji supplement.
    pub fn with_emoji() -> Self {
        Self {
            symbols: DEFAULT_ALPHABET.chars().chain(EMOJI_ALPHABET.chars()).collect(),
        }
    }

    /// Total symbol count, duplicates included. This is the encoding radix.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Number of distinct symbols.
    pub fn distinct(&self) -> usize {
        self.symbols.iter().collect::<HashSet<_>>().len()
    }

    /// Symbol used for padding and for the all-zero digest.
    pub fn first(&self) -> char {
        self.symbols[0]
    }

    /// Symbol at digit index `i` (0-based).
    pub fn symbol(&self, i: usize) -> char {
        self.symbols[i]
    }

    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::ascii()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_has_94_symbols() {
        let a = Alphabet::ascii();
        assert_eq!(a.len(), 94);
        assert_eq!(a.distinct(), 94);
        assert_eq!(a.first(), 'a');
    }

    #[test]
    fn emoji_set_extends_the_default() {
        let a = Alphabet::with_emoji();
        assert!(a.len() > 94);
        // duplicated emoji keep the total above the distinct count
        assert!(a.distinct() < a.len());
        assert_eq!(a.symbol(0), 'a');
    }

    #[test]
    fn single_symbol_is_rejected() {
        match Alphabet::new("a") {
            Err(DeriveError::InvalidAlphabet(distinct)) => assert_eq!(distinct, 1),
            other => panic!("expected InvalidAlphabet, got: {other:?}"),
        }
    }

    #[test]
    fn repeated_single_symbol_is_rejected() {
        assert!(matches!(
            Alphabet::new("aaaa"),
            Err(DeriveError::InvalidAlphabet(1))
        ));
    }

    #[test]
    fn empty_alphabet_is_rejected() {
        assert!(matches!(
            Alphabet::new(""),
            Err(DeriveError::InvalidAlphabet(0))
        ));
    }

    #[test]
    fn duplicates_are_allowed_and_counted_in_len() {
        let a = Alphabet::new("abca").unwrap();
        assert_eq!(a.len(), 4);
        assert_eq!(a.distinct(), 3);
    }
}
