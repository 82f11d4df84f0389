// LCDC bits consumed by the background pipeline
const LCDC_BG_ENABLE: u8 = 0x01;
const LCDC_BG_MAP: u8 = 0x08;
const LCDC_TILE_DATA: u8 = 0x10;
const LCDC_LCD_ENABLE: u8 = 0x80;

/// How a tile index byte selects tile data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TileAddressing {
    /// Index 0..=255 relative to 0x8000.
    #[default]
    Unsigned,
    /// Index -128..=127 relative to 0x9000.
    Signed,
}

impl TileAddressing {
    /// Tile number for a raw map byte: zero-extended or sign-extended.
    #[inline(always)]
    pub fn tile_number(self, raw: u8) -> i16 {
        match self {
            Self::Unsigned => raw as i16,
            Self::Signed => raw as i8 as i16,
        }
    }
}

/// Which of the two 32×32 tile index maps is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MapSelect {
    /// 0x9800-0x9BFF
    #[default]
    Low,
    /// 0x9C00-0x9FFF
    High,
}

/// LCD control register (LCDC, 0xFF40).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LcdControl(pub u8);

impl LcdControl {
    /// Value left behind by the boot ROM.
    pub const POST_BOOT: Self = Self(0x91);

    pub fn lcd_enabled(self) -> bool {
        self.0 & LCDC_LCD_ENABLE != 0
    }

    pub fn bg_enabled(self) -> bool {
        self.0 & LCDC_BG_ENABLE != 0
    }

    pub fn tile_addressing(self) -> TileAddressing {
        if self.0 & LCDC_TILE_DATA != 0 {
            TileAddressing::Unsigned
        } else {
            TileAddressing::Signed
        }
    }

    pub fn bg_map(self) -> MapSelect {
        if self.0 & LCDC_BG_MAP != 0 {
            MapSelect::High
        } else {
            MapSelect::Low
        }
    }
}

impl Default for LcdControl {
    fn default() -> Self {
        Self::POST_BOOT
    }
}

/// Background scroll registers (SCX, SCY). Both wrap at 256.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Scroll {
    pub x: u8,
    pub y: u8,
}

impl Scroll {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}
