//! Fixed 26-letter Latin alphabet.
//!
//! Every transform and every wheel ring shares the same read-only mapping
//! between the letters `A..=Z` and their zero-based positions.

/// Number of letters in the cipher alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// The cipher alphabet in position order.
pub const ALPHABET: [char; ALPHABET_LEN as usize] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Position of `c` in the alphabet, `None` for anything outside `A..=Z`.
///
/// Lowercase letters are not in the alphabet; callers uppercase first.
pub fn index_of(c: char) -> Option<u8> {
    if c.is_ascii_uppercase() { Some(c as u8 - b'A') } else { None }
}

/// Letter at `index`, reduced modulo the alphabet length.
pub fn letter_at(index: u8) -> char {
    ALPHABET[usize::from(index % ALPHABET_LEN)]
}

/// All letters in position order, paired with their index.
pub fn letters() -> impl ExactSizeIterator<Item = (u8, char)> {
    ALPHABET.iter().enumerate().map(|(i, &c)| (i as u8, c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_letter_agree() {
        for (i, c) in letters() {
            assert_eq!(index_of(c), Some(i));
            assert_eq!(letter_at(i), c);
        }
    }

    #[test]
    fn non_letters_have_no_index() {
        for c in ['a', 'z', ' ', '0', '!', 'É', 'ß', '@', '['] {
            assert_eq!(index_of(c), None, "{c:?} should not be in the alphabet");
        }
    }

    #[test]
    fn letter_at_wraps() {
        assert_eq!(letter_at(26), 'A');
        assert_eq!(letter_at(51), 'Z');
    }
}
