//! Target prefix parsing and matching

use crate::error::HuntError;

/// A validated, lowercase hex prefix.
///
/// Matching works on the raw digest bytes one nibble at a time, which gives
/// the same answer as hex-encoding the digest and comparing the leading
/// characters, without allocating a string per candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    text: String,
    nibbles: Vec<u8>,
}

impl Prefix {
    /// Parse user input. Surrounding whitespace is ignored and upper-case
    /// digits are folded to lower case.
    pub fn parse(input: &str) -> Result<Self, HuntError> {
        let text = input.trim().to_ascii_lowercase();
        if text.is_empty() {
            return Err(HuntError::EmptyPrefix);
        }

        let mut nibbles = Vec::with_capacity(text.len());
        for (position, ch) in text.chars().enumerate() {
            match ch.to_digit(16) {
                Some(n) => nibbles.push(n as u8),
                None => return Err(HuntError::InvalidPrefixChar { ch, position }),
            }
        }

        Ok(Self { text, nibbles })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of hex digits.
    pub fn len(&self) -> usize {
        self.nibbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nibbles.is_empty()
    }

    /// True if the hex encoding of `digest` starts with this prefix.
    pub fn matches(&self, digest: &[u8]) -> bool {
        if self.nibbles.len() > digest.len() * 2 {
            return false;
        }
        self.nibbles.iter().enumerate().all(|(i, &want)| {
            let byte = digest[i / 2];
            let got = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
            got == want
        })
    }

    /// Expected number of candidates per match (16^len).
    pub fn expected_attempts(&self) -> f64 {
        16f64.powi(self.nibbles.len() as i32)
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Prefix {
    type Err = HuntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Prefix::parse(s)
    }
}
