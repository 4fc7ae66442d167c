//! Parser states and bit image assembly buffers.

/// How the decoder interprets the *next* byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Normal,

    /// After ESC
    Escape,
    /// ESC ! n
    EscBang,
    /// ESC E n
    EscEmphasis,
    /// ESC - n
    EscUnderline,
    /// ESC d n
    EscFeedLines,
    /// ESC 3 n
    EscLineSpacing,
    /// ESC t n
    EscCodePage,
    /// ESC c
    EscPanel,
    /// ESC c 4 n
    EscPanel4,
    /// ESC c 5 n
    EscPanel5,

    /// After GS
    GroupSep,
    /// GS V m
    Cut,
    /// GS V 65|66 n
    CutFeed,
    /// GS v
    Raster,
    /// GS v 0 m
    RasterMode,
    RasterWidthLow,
    RasterWidthHigh,
    RasterHeightLow,
    RasterHeightHigh,
    /// Raster payload until the declared length is reached
    RasterData,
    /// GS * x
    DownloadWidth,
    /// GS * x y
    DownloadHeight,
    /// Download payload until the declared length is reached
    DownloadData,
    /// GS / m
    DownloadPrint,
}

impl State {
    /// True while a bit image payload is being received.
    pub fn is_receiving_data(self) -> bool {
        matches!(self, State::RasterData | State::DownloadData)
    }
}

/// Upper bound for buffer preallocation; larger payloads grow as they arrive.
const MAX_PREALLOC: usize = 1 << 20;

/// In-flight `GS v 0` image.
#[derive(Debug, Clone, Default)]
pub struct RasterAssembly {
    pub mode: u8,
    pub width_bytes: u16,
    pub height_dots: u16,
    pub expected: usize,
    pub data: Vec<u8>,
}

impl RasterAssembly {
    /// Compute the payload length from the header and prepare the buffer.
    /// Returns false for an empty image.
    pub fn begin(&mut self) -> bool {
        self.expected = self.width_bytes as usize * self.height_dots as usize;
        self.data.clear();
        self.data.reserve(self.expected.min(MAX_PREALLOC));
        self.expected > 0
    }

    /// Append one payload byte. Returns true once the payload is complete.
    pub fn push(&mut self, byte: u8) -> bool {
        self.data.push(byte);
        self.data.len() >= self.expected
    }
}

/// In-flight `GS *` image.
#[derive(Debug, Clone, Default)]
pub struct DownloadAssembly {
    pub width_bytes: u8,
    pub height_bytes: u8,
    pub expected: usize,
    pub data: Vec<u8>,
}

impl DownloadAssembly {
    /// `x * y * 8`: y counts bytes of 8 vertical dots, for each of `x*8`
    /// columns. Returns false for an empty image.
    pub fn begin(&mut self) -> bool {
        self.expected = self.width_bytes as usize * self.height_bytes as usize * 8;
        self.data.clear();
        self.data.reserve(self.expected.min(MAX_PREALLOC));
        self.expected > 0
    }

    pub fn push(&mut self, byte: u8) -> bool {
        self.data.push(byte);
        self.data.len() >= self.expected
    }
}

/// The stored `GS *` image, printed by `GS /`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedBitmap {
    pub data: Vec<u8>,
    pub width_bytes: u8,
    pub height_bytes: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_expected_length() {
        let mut r = RasterAssembly {
            width_bytes: 3,
            height_dots: 300,
            ..Default::default()
        };
        assert!(r.begin());
        assert_eq!(r.expected, 900);
    }

    #[test]
    fn test_empty_raster() {
        let mut r = RasterAssembly {
            width_bytes: 0,
            height_dots: 10,
            ..Default::default()
        };
        assert!(!r.begin());
    }

    #[test]
    fn test_download_expected_length() {
        let mut d = DownloadAssembly {
            width_bytes: 2,
            height_bytes: 3,
            ..Default::default()
        };
        assert!(d.begin());
        assert_eq!(d.expected, 48);
        for _ in 0..47 {
            assert!(!d.push(0));
        }
        assert!(d.push(0));
    }
}
