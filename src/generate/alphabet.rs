//! Fixed symbol tables

/// The 64-symbol table. Digits run `1`..`9` then `0`.
const BASE64_SYMBOLS: &[u8; 64] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890+/";

/// The 64-symbol table without `+` and `/`
const BASE62_SYMBOLS: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890";

/// Alphabet a random string is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// Letters, digits, `+` and `/`
    Base64,
    /// Letters and digits only; URL-safe
    Base62,
}

impl Alphabet {
    /// Symbols in index order
    pub fn symbols(self) -> &'static [u8] {
        match self {
            Alphabet::Base64 => BASE64_SYMBOLS,
            Alphabet::Base62 => BASE62_SYMBOLS,
        }
    }

    /// Number of symbols
    pub fn size(self) -> usize {
        self.symbols().len()
    }

    /// Whether `c` belongs to this alphabet
    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.symbols().contains(&(c as u8))
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Alphabet::Base64 => "base64",
            Alphabet::Base62 => "base62",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(Alphabet::Base64.size(), 64);
        assert_eq!(Alphabet::Base62.size(), 62);
    }

    #[test]
    fn test_symbols_distinct() {
        for alphabet in [Alphabet::Base64, Alphabet::Base62] {
            let unique: HashSet<&u8> = alphabet.symbols().iter().collect();
            assert_eq!(unique.len(), alphabet.size());
        }
    }

    #[test]
    fn test_index_order() {
        let table = Alphabet::Base64.symbols();
        assert_eq!(table[0], b'a');
        assert_eq!(table[25], b'z');
        assert_eq!(table[26], b'A');
        assert_eq!(table[51], b'Z');
        assert_eq!(table[52], b'1');
        assert_eq!(table[61], b'0');
        assert_eq!(table[62], b'+');
        assert_eq!(table[63], b'/');
    }

    #[test]
    fn test_base62_is_base64_prefix() {
        assert_eq!(Alphabet::Base62.symbols(), &Alphabet::Base64.symbols()[..62]);
    }

    #[test]
    fn test_contains() {
        assert!(Alphabet::Base64.contains('+'));
        assert!(Alphabet::Base64.contains('/'));
        assert!(!Alphabet::Base62.contains('+'));
        assert!(!Alphabet::Base62.contains('/'));
        assert!(Alphabet::Base62.contains('0'));
        assert!(!Alphabet::Base64.contains('-'));
        assert!(!Alphabet::Base64.contains('é'));
    }
}
