use super::color::RgbaColor;

/// Colors used to mark applied spacing when debug drawing is enabled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugPalette {
    /// Edge margins (Red 500).
    pub edge: RgbaColor,
    /// Per-item padding (Yellow 500).
    pub item: RgbaColor,
    /// Horizontal gap after each item (Cyan 500).
    pub horizontal: RgbaColor,
    /// Vertical gap below each item (Light Green A400).
    pub vertical: RgbaColor,
}

impl Default for DebugPalette {
    fn default() -> Self {
        Self {
            edge: RgbaColor::rgb(0xF4, 0x43, 0x36),
            item: RgbaColor::rgb(0xFF, 0xEB, 0x3B),
            horizontal: RgbaColor::rgb(0x00, 0xBC, 0xD4),
            vertical: RgbaColor::rgb(0x76, 0xFF, 0x03),
        }
    }
}
