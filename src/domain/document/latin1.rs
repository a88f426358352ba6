//! Lossy Latin-1 text encoding
//!
//! The exported document uses the standard Helvetica fonts with WinAnsi
//! encoding, so only printable Latin-1 characters can be drawn. Anything
//! else is replaced by exactly one [`PLACEHOLDER`] byte.

/// Byte written in place of every character that cannot be encoded
pub const PLACEHOLDER: u8 = b'?';

/// Text split into lines and encoded to single-byte Latin-1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Latin1Text {
    lines: Vec<Vec<u8>>,
    substitutions: usize,
}

impl Latin1Text {
    /// Encode text, treating `\n`, `\r\n` and a lone `\r` as line breaks.
    /// A single trailing line break does not produce an extra empty line.
    pub fn encode(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut current = Vec::new();
        let mut substitutions = 0;
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\n' => lines.push(std::mem::take(&mut current)),
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    lines.push(std::mem::take(&mut current));
                }
                _ => match encode_char(c) {
                    Some(byte) => current.push(byte),
                    None => {
                        current.push(PLACEHOLDER);
                        substitutions += 1;
                    }
                },
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }

        Self {
            lines,
            substitutions,
        }
    }

    /// Encoded lines, without line terminators
    pub fn lines(&self) -> &[Vec<u8>] {
        &self.lines
    }

    /// Number of characters replaced by the placeholder
    pub fn substitutions(&self) -> usize {
        self.substitutions
    }

    /// Consume and return the encoded lines
    pub fn into_lines(self) -> Vec<Vec<u8>> {
        self.lines
    }
}

/// Encode a single character, or `None` when it has no printable Latin-1 form.
/// Tab is drawn as a space.
pub fn encode_char(c: char) -> Option<u8> {
    match c as u32 {
        0x09 => Some(b' '),
        code @ (0x20..=0x7E | 0xA0..=0xFF) => Some(code as u8),
        _ => None,
    }
}

/// Decode Latin-1 bytes back into a string
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
