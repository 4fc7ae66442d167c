//! # Character Code Tables
//!
//! Maps single extended bytes (0x80–0xFF) received from the host to Unicode
//! characters under the code page selected with `ESC t n`.
//!
//! ASCII (0x00–0x7F) passes through unchanged. Unknown selectors fall back
//! to PC437, the power-on default of most ESC/POS printers.
//!
//! | `ESC t n` | Table |
//! |-----------|-------|
//! | 0 | PC437 (USA, Standard Europe) |
//! | 2 | PC850 (Multilingual) |
//! | 3 | PC860 (Portuguese) |

/// A character code table selectable with `ESC t n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodePage {
    /// PC437 (USA, Standard Europe)
    #[default]
    Pc437,
    /// PC850 (Multilingual Latin-1)
    Pc850,
    /// PC860 (Portuguese)
    Pc860,
}

impl CodePage {
    /// Resolve an `ESC t n` selector. Unknown values fall back to PC437.
    pub fn from_selector(n: u8) -> Self {
        match n {
            2 => CodePage::Pc850,
            3 => CodePage::Pc860,
            _ => CodePage::Pc437,
        }
    }

    /// The `ESC t n` selector for this table.
    pub fn selector(self) -> u8 {
        match self {
            CodePage::Pc437 => 0,
            CodePage::Pc850 => 2,
            CodePage::Pc860 => 3,
        }
    }

    fn upper_half(self) -> &'static [char; 128] {
        match self {
            CodePage::Pc437 => &PC437,
            CodePage::Pc850 => &PC850,
            CodePage::Pc860 => &PC860,
        }
    }

    /// Decode one byte under this table.
    #[inline]
    pub fn decode(self, byte: u8) -> char {
        if byte < 0x80 {
            byte as char
        } else {
            self.upper_half()[(byte - 0x80) as usize]
        }
    }
}

/// Decode one byte under the table selected by `code_page` (an `ESC t n`
/// value).
///
/// ```
/// use boleta::protocol::codepage::translate;
///
/// assert_eq!(translate(b'A', 0), 'A');
/// assert_eq!(translate(0x80, 0), 'Ç');
/// assert_eq!(translate(0x86, 3), 'Á');
/// ```
#[inline]
pub fn translate(byte: u8, code_page: u8) -> char {
    CodePage::from_selector(code_page).decode(byte)
}

/// PC437 upper half (0x80–0xFF)
#[rustfmt::skip]
static PC437: [char; 128] = [
    // 0x80–0x8F
    '\u{00C7}', '\u{00FC}', '\u{00E9}', '\u{00E2}', '\u{00E4}', '\u{00E0}', '\u{00E5}', '\u{00E7}',
    '\u{00EA}', '\u{00EB}', '\u{00E8}', '\u{00EF}', '\u{00EE}', '\u{00EC}', '\u{00C4}', '\u{00C5}',
    // 0x90–0x9F
    '\u{00C9}', '\u{00E6}', '\u{00C6}', '\u{00F4}', '\u{00F6}', '\u{00F2}', '\u{00FB}', '\u{00F9}',
    '\u{00FF}', '\u{00D6}', '\u{00DC}', '\u{00A2}', '\u{00A3}', '\u{00A5}', '\u{20A7}', '\u{0192}',
    // 0xA0–0xAF
    '\u{00E1}', '\u{00ED}', '\u{00F3}', '\u{00FA}', '\u{00F1}', '\u{00D1}', '\u{00AA}', '\u{00BA}',
    '\u{00BF}', '\u{2310}', '\u{00AC}', '\u{00BD}', '\u{00BC}', '\u{00A1}', '\u{00AB}', '\u{00BB}',
    // 0xB0–0xBF
    '\u{2591}', '\u{2592}', '\u{2593}', '\u{2502}', '\u{2524}', '\u{2561}', '\u{2562}', '\u{2556}',
    '\u{2555}', '\u{2563}', '\u{2551}', '\u{2557}', '\u{255D}', '\u{255C}', '\u{255B}', '\u{2510}',
    // 0xC0–0xCF
    '\u{2514}', '\u{2534}', '\u{252C}', '\u{251C}', '\u{2500}', '\u{253C}', '\u{255E}', '\u{255F}',
    '\u{255A}', '\u{2554}', '\u{2569}', '\u{2566}', '\u{2560}', '\u{2550}', '\u{256C}', '\u{2567}',
    // 0xD0–0xDF
    '\u{2568}', '\u{2564}', '\u{2565}', '\u{2559}', '\u{2558}', '\u{2552}', '\u{2553}', '\u{256B}',
    '\u{256A}', '\u{2518}', '\u{250C}', '\u{2588}', '\u{2584}', '\u{258C}', '\u{2590}', '\u{2580}',
    // 0xE0–0xEF
    '\u{03B1}', '\u{00DF}', '\u{0393}', '\u{03C0}', '\u{03A3}', '\u{03C3}', '\u{00B5}', '\u{03C4}',
    '\u{03A6}', '\u{0398}', '\u{03A9}', '\u{03B4}', '\u{221E}', '\u{03C6}', '\u{03B5}', '\u{2229}',
    // 0xF0–0xFF
    '\u{2261}', '\u{00B1}', '\u{2265}', '\u{2264}', '\u{2320}', '\u{2321}', '\u{00F7}', '\u{2248}',
    '\u{00B0}', '\u{2219}', '\u{00B7}', '\u{221A}', '\u{207F}', '\u{00B2}', '\u{25A0}', '\u{00A0}',
];

/// PC850 upper half (0x80–0xFF)
#[rustfmt::skip]
static PC850: [char; 128] = [
    // 0x80–0x8F
    '\u{00C7}', '\u{00FC}', '\u{00E9}', '\u{00E2}', '\u{00E4}', '\u{00E0}', '\u{00E5}', '\u{00E7}',
    '\u{00EA}', '\u{00EB}', '\u{00E8}', '\u{00EF}', '\u{00EE}', '\u{00EC}', '\u{00C4}', '\u{00C5}',
    // 0x90–0x9F
    '\u{00C9}', '\u{00E6}', '\u{00C6}', '\u{00F4}', '\u{00F6}', '\u{00F2}', '\u{00FB}', '\u{00F9}',
    '\u{00FF}', '\u{00D6}', '\u{00DC}', '\u{00F8}', '\u{00A3}', '\u{00D8}', '\u{00D7}', '\u{0192}',
    // 0xA0–0xAF
    '\u{00E1}', '\u{00ED}', '\u{00F3}', '\u{00FA}', '\u{00F1}', '\u{00D1}', '\u{00AA}', '\u{00BA}',
    '\u{00BF}', '\u{00AE}', '\u{00AC}', '\u{00BD}', '\u{00BC}', '\u{00A1}', '\u{00AB}', '\u{00BB}',
    // 0xB0–0xBF
    '\u{2591}', '\u{2592}', '\u{2593}', '\u{2502}', '\u{2524}', '\u{00C1}', '\u{00C2}', '\u{00C0}',
    '\u{00A9}', '\u{2563}', '\u{2551}', '\u{2557}', '\u{255D}', '\u{00A2}', '\u{00A5}', '\u{2510}',
    // 0xC0–0xCF
    '\u{2514}', '\u{2534}', '\u{252C}', '\u{251C}', '\u{2500}', '\u{253C}', '\u{00E3}', '\u{00C3}',
    '\u{255A}', '\u{2554}', '\u{2569}', '\u{2566}', '\u{2560}', '\u{2550}', '\u{256C}', '\u{00A4}',
    // 0xD0–0xDF
    '\u{00F0}', '\u{00D0}', '\u{00CA}', '\u{00CB}', '\u{00C8}', '\u{0131}', '\u{00CD}', '\u{00CE}',
    '\u{00CF}', '\u{2518}', '\u{250C}', '\u{2588}', '\u{2584}', '\u{00A6}', '\u{00CC}', '\u{2580}',
    // 0xE0–0xEF
    '\u{00D3}', '\u{00DF}', '\u{00D4}', '\u{00D2}', '\u{00F5}', '\u{00D5}', '\u{00B5}', '\u{00FE}',
    '\u{00DE}', '\u{00DA}', '\u{00DB}', '\u{00D9}', '\u{00FD}', '\u{00DD}', '\u{00AF}', '\u{00B4}',
    // 0xF0–0xFF
    '\u{00AD}', '\u{00B1}', '\u{2017}', '\u{00BE}', '\u{00B6}', '\u{00A7}', '\u{00F7}', '\u{00B8}',
    '\u{00B0}', '\u{00A8}', '\u{00B7}', '\u{00B9}', '\u{00B3}', '\u{00B2}', '\u{25A0}', '\u{00A0}',
];

/// PC860 upper half (0x80–0xFF)
#[rustfmt::skip]
static PC860: [char; 128] = [
    // 0x80–0x8F
    '\u{00C7}', '\u{00FC}', '\u{00E9}', '\u{00E2}', '\u{00E3}', '\u{00E0}', '\u{00C1}', '\u{00E7}',
    '\u{00EA}', '\u{00CA}', '\u{00E8}', '\u{00CD}', '\u{00D4}', '\u{00EC}', '\u{00C3}', '\u{00C2}',
    // 0x90–0x9F
    '\u{00C9}', '\u{00C0}', '\u{00C8}', '\u{00F4}', '\u{00F5}', '\u{00F2}', '\u{00DA}', '\u{00F9}',
    '\u{00CC}', '\u{00D5}', '\u{00DC}', '\u{00A2}', '\u{00A3}', '\u{00D9}', '\u{20A7}', '\u{00D3}',
    // 0xA0–0xAF
    '\u{00E1}', '\u{00ED}', '\u{00F3}', '\u{00FA}', '\u{00F1}', '\u{00D1}', '\u{00AA}', '\u{00BA}',
    '\u{00BF}', '\u{00D2}', '\u{00AC}', '\u{00BD}', '\u{00BC}', '\u{00A1}', '\u{00AB}', '\u{00BB}',
    // 0xB0–0xBF
    '\u{2591}', '\u{2592}', '\u{2593}', '\u{2502}', '\u{2524}', '\u{2561}', '\u{2562}', '\u{2556}',
    '\u{2555}', '\u{2563}', '\u{2551}', '\u{2557}', '\u{255D}', '\u{255C}', '\u{255B}', '\u{2510}',
    // 0xC0–0xCF
    '\u{2514}', '\u{2534}', '\u{252C}', '\u{251C}', '\u{2500}', '\u{253C}', '\u{255E}', '\u{255F}',
    '\u{255A}', '\u{2554}', '\u{2569}', '\u{2566}', '\u{2560}', '\u{2550}', '\u{256C}', '\u{2567}',
    // 0xD0–0xDF
    '\u{2568}', '\u{2564}', '\u{2565}', '\u{2559}', '\u{2558}', '\u{2552}', '\u{2553}', '\u{256B}',
    '\u{256A}', '\u{2518}', '\u{250C}', '\u{2588}', '\u{2584}', '\u{258C}', '\u{2590}', '\u{2580}',
    // 0xE0–0xEF
    '\u{03B1}', '\u{00DF}', '\u{0393}', '\u{03C0}', '\u{03A3}', '\u{03C3}', '\u{00B5}', '\u{03C4}',
    '\u{03A6}', '\u{0398}', '\u{03A9}', '\u{03B4}', '\u{221E}', '\u{03C6}', '\u{03B5}', '\u{2229}',
    // 0xF0–0xFF
    '\u{2261}', '\u{00B1}', '\u{2265}', '\u{2264}', '\u{2320}', '\u{2321}', '\u{00F7}', '\u{2248}',
    '\u{00B0}', '\u{2219}', '\u{00B7}', '\u{221A}', '\u{207F}', '\u{00B2}', '\u{25A0}', '\u{00A0}',
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        for b in 0u8..0x80 {
            assert_eq!(translate(b, 0), b as char);
            assert_eq!(translate(b, 3), b as char);
        }
    }

    #[test]
    fn test_shared_entry() {
        assert_eq!(translate(0x80, 0), 'Ç');
        assert_eq!(translate(0x80, 3), 'Ç');
    }

    #[test]
    fn test_tables_diverge() {
        assert_eq!(translate(0x86, 0), 'å');
        assert_eq!(translate(0x86, 3), 'Á');
        assert_eq!(translate(0x8E, 0), 'Ä');
        assert_eq!(translate(0x8E, 3), 'Ã');
    }

    #[test]
    fn test_pc850() {
        assert_eq!(translate(0x9B, 2), 'ø');
        assert_eq!(translate(0x9D, 2), 'Ø');
        assert_eq!(translate(0xB8, 2), '©');
        assert_eq!(translate(0x9B, 0), '¢');
    }

    #[test]
    fn test_box_drawing() {
        assert_eq!(translate(0xC9, 0), '╔');
        assert_eq!(translate(0xCD, 0), '═');
        assert_eq!(translate(0xBB, 0), '╗');
    }

    #[test]
    fn test_last_entry() {
        assert_eq!(translate(0xFE, 0), '■');
        assert_eq!(translate(0xFF, 0), '\u{00A0}');
    }

    #[test]
    fn test_unknown_selector_falls_back() {
        assert_eq!(CodePage::from_selector(1), CodePage::Pc437);
        assert_eq!(CodePage::from_selector(255), CodePage::Pc437);
        assert_eq!(translate(0x86, 17), 'å');
    }

    #[test]
    fn test_selector_round_trip() {
        for page in [CodePage::Pc437, CodePage::Pc850, CodePage::Pc860] {
            assert_eq!(CodePage::from_selector(page.selector()), page);
        }
    }
}
