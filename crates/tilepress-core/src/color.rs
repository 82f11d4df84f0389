/// Pack channels into the `0xRRGGBBAA` layout used for output pixels.
#[inline(always)]
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (r as u32) << 24 | (g as u32) << 16 | (b as u32) << 8 | a as u32
}

/// Opaque black in `0xRRGGBBAA`.
pub const BLACK: u32 = rgba(0, 0, 0, 0xFF);

/// Packed 15-bit color sample: `-bbbbbgg gggrrrrr`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rgb555(pub u16);

impl Rgb555 {
    pub const fn red(self) -> u8 {
        (self.0 & 0x1F) as u8
    }

    pub const fn green(self) -> u8 {
        ((self.0 >> 5) & 0x1F) as u8
    }

    pub const fn blue(self) -> u8 {
        ((self.0 >> 10) & 0x1F) as u8
    }

    /// Expand each channel to 8 bits with a plain `<< 3`, so 0x1F becomes
    /// 0xF8 rather than 0xFF.
    pub const fn to_rgb888(self) -> (u8, u8, u8) {
        (self.red() << 3, self.green() << 3, self.blue() << 3)
    }

    /// Opaque `0xRRGGBBAA` pixel.
    pub const fn to_rgba(self) -> u32 {
        let (r, g, b) = self.to_rgb888();
        rgba(r, g, b, 0xFF)
    }
}
