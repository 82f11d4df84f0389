/// Four colors indexed by a 2-bit pixel value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette<T>(pub [T; 4]);

impl Palette<u32> {
    /// White, light gray, dark gray, black. Each byte of an entry is the
    /// same value so the alpha channel is replicated too.
    pub const MONOCHROME: Self = Self([0xFFFFFFFF, 0xAAAAAAAA, 0x66666666, 0x11111111]);
}

impl Palette<u8> {
    /// Passes color indices through unchanged.
    pub const IDENTITY: Self = Self([0, 1, 2, 3]);
}

impl<T: Copy> Palette<T> {
    #[inline(always)]
    pub fn color(&self, index: u8) -> T {
        self.0[(index & 0x03) as usize]
    }

    /// Remap through a BGP-style shade register: color `i` becomes entry
    /// `(bgp >> (i * 2)) & 3` of this palette.
    pub fn with_shades(&self, bgp: u8) -> Self {
        Self(std::array::from_fn(|i| self.color(shade(bgp, i as u8))))
    }
}

impl Default for Palette<u32> {
    fn default() -> Self {
        Self::MONOCHROME
    }
}

#[inline(always)]
fn shade(bgp: u8, color_id: u8) -> u8 {
    (bgp >> (color_id * 2)) & 0x03
}
