//! Codec between external literal names (`A`, `b`, `-C`) and `Lit` codes.

use std::fmt;

use crate::types::{Lit, Sign, Var};

/// Maps a one- or two-character name to its literal.
///
/// A single letter (either case) is a positive literal, a `-` followed by
/// a letter is a negative one. Anything else yields `Lit::ERROR`.
pub fn encode(name: &str) -> Lit {
    let (sign, letter) = match name.as_bytes() {
        [l] => (Sign::Pos, *l),
        [b'-', l] => (Sign::Neg, *l),
        _ => return Lit::ERROR,
    };
    if !letter.is_ascii_alphabetic() {
        return Lit::ERROR;
    }
    let var = Var::from_u32((letter.to_ascii_uppercase() - b'A') as u32 + 1);
    Lit::new(var, sign)
}

/// Canonical name of `lit`, or `?` when it is not a valid literal.
pub fn decode(lit: Lit) -> String {
    lit.to_string()
}

fn letter(var: Var) -> char {
    (b'A' + (var.to_u32() - 1) as u8) as char
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "?");
        }
        match self.sign() {
            Sign::Pos => write!(f, "{}", letter(self.var())),
            Sign::Neg => write!(f, "-{}", letter(self.var())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_decode() {
        let cases = [
            (1, "A"), (2, "B"), (26, "Z"),
            (-1, "-A"), (-2, "-B"), (-26, "-Z"),
            (0, "?"), (27, "?"), (-27, "?"),
        ];
        for (code, name) in cases {
            assert_eq!(decode(Lit::from_i32(code)), name, "decode({code})");
        }
    }

    #[test]
    fn test_encode() {
        let cases = [
            ("A", 1), ("B", 2), ("Z", 26),
            ("a", 1), ("z", 26),
            ("-A", -1), ("-Z", -26), ("-a", -1),
        ];
        for (name, code) in cases {
            assert_eq!(encode(name), Lit::from_i32(code), "encode({name:?})");
        }
    }

    #[test]
    fn test_encode_rejects() {
        for name in ["", "ABC", "1", "-1", " ", "@", "--A", "A-", "-", "AB", "é", "-é"] {
            assert_eq!(encode(name), Lit::ERROR, "encode({name:?})");
        }
    }

    #[test]
    fn test_roundtrip_codes() {
        for code in (-26..=-1).chain(1..=26) {
            let lit = Lit::from_i32(code);
            assert_eq!(encode(&decode(lit)), lit);
        }
    }

    #[test]
    fn test_roundtrip_names() {
        for letter in (b'a'..=b'z').chain(b'A'..=b'Z') {
            let pos = (letter as char).to_string();
            let neg = format!("-{pos}");
            assert_eq!(decode(encode(&pos)), pos.to_ascii_uppercase());
            assert_eq!(decode(encode(&neg)), neg.to_ascii_uppercase());
        }
    }
}
