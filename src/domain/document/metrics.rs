//! Glyph widths for the standard Helvetica fonts

/// Standard Type 1 fonts used by the exported document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

/// Helvetica advance widths for 0x20..=0x7E, in 1/1000 em
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

/// Helvetica-Bold advance widths for 0x20..=0x7E, in 1/1000 em
const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0'..'?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P'..'_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`'..'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 'p'..'~'
];

/// Helvetica advance widths for 0xA0..=0xFF (WinAnsi upper half), in 1/1000 em
const HELVETICA_UPPER: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333, // 0xA0..
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611, // 0xB0..
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // 0xC0..
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // 0xD0..
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278, // 0xE0..
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500, // 0xF0..
];

/// Helvetica-Bold advance widths for 0xA0..=0xFF (WinAnsi upper half), in 1/1000 em
const HELVETICA_BOLD_UPPER: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333, // 0xA0..
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611, // 0xB0..
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // 0xC0..
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // 0xD0..
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278, // 0xE0..
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556, // 0xF0..
];

impl Font {
    /// PostScript name of the standard font
    pub const fn base_font(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Name the font is registered under in page resources
    pub const fn resource_name(&self) -> &'static str {
        match self {
            Self::Helvetica => "F1",
            Self::HelveticaBold => "F2",
        }
    }

    /// Advance width of one Latin-1 byte, in 1/1000 em.
    ///
    /// Bytes outside the printable ranges never reach the layout; they are
    /// measured as the placeholder glyph.
    pub fn glyph_width(&self, byte: u8) -> u32 {
        let (ascii, upper) = match self {
            Self::Helvetica => (&HELVETICA_ASCII, &HELVETICA_UPPER),
            Self::HelveticaBold => (&HELVETICA_BOLD_ASCII, &HELVETICA_BOLD_UPPER),
        };

        let width = match byte {
            0x20..=0x7E => ascii[usize::from(byte - 0x20)],
            0xA0..=0xFF => upper[usize::from(byte - 0xA0)],
            _ => ascii[usize::from(b'?' - 0x20)],
        };
        u32::from(width)
    }

    /// Width of a run of bytes, in 1/1000 pt
    pub fn text_width(&self, text: &[u8], size: i64) -> i64 {
        let units: u32 = text.iter().map(|&b| self.glyph_width(b)).sum();
        i64::from(units) * size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_widths() {
        assert_eq!(Font::Helvetica.glyph_width(b' '), 278);
        assert_eq!(Font::Helvetica.glyph_width(b'W'), 944);
        assert_eq!(Font::Helvetica.glyph_width(b'i'), 222);
        assert_eq!(Font::Helvetica.glyph_width(b'~'), 584);
        assert_eq!(Font::HelveticaBold.glyph_width(b'i'), 278);
    }

    #[test]
    fn upper_half_matches_afm() {
        // (byte, Helvetica, Helvetica-Bold) from the Adobe core font metrics
        let expected = [
            (0xA9, 737, 737), // copyright
            (0xB5, 556, 611), // mu
            (0xBD, 834, 834), // onehalf
            (0xC6, 1000, 1000), // AE
            (0xD0, 722, 722), // Eth
            (0xD1, 722, 722), // Ntilde
            (0xDE, 667, 667), // Thorn
            (0xDF, 611, 611), // germandbls
            (0xE7, 500, 556), // ccedilla
            (0xE9, 556, 556), // eacute
            (0xED, 278, 278), // iacute
            (0xF1, 556, 611), // ntilde
            (0xF8, 611, 611), // oslash
            (0xFF, 500, 556), // ydieresis
        ];
        for (byte, regular, bold) in expected {
            assert_eq!(Font::Helvetica.glyph_width(byte), regular, "{byte:#04X}");
            assert_eq!(Font::HelveticaBold.glyph_width(byte), bold, "bold {byte:#04X}");
        }
    }

    #[test]
    fn unprintable_bytes_measure_as_placeholder() {
        assert_eq!(
            Font::Helvetica.glyph_width(0x85),
            Font::Helvetica.glyph_width(b'?')
        );
    }

    #[test]
    fn text_width_scales_with_size() {
        let width = Font::Helvetica.text_width(b"ab", 10);
        assert_eq!(width, (556 + 556) * 10);
    }

    #[test]
    fn bold_is_not_narrower() {
        let text = b"TRADUCCION RECETA MEDICA (IA)";
        let bold = Font::HelveticaBold.text_width(text, 16);
        assert!(bold >= Font::Helvetica.text_width(text, 16));
    }

    #[test]
    fn resource_names_differ() {
        assert_ne!(
            Font::Helvetica.resource_name(),
            Font::HelveticaBold.resource_name()
        );
    }
}
