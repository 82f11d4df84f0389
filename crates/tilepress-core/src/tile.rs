/// Width and height of a tile in pixels.
pub const TILE_SIZE: usize = 8;
/// Bytes per tile: two bitplane bytes for each of the 8 rows.
pub const TILE_BYTES: usize = 16;

/// An 8×8 block of 2-bit color indices.
///
/// Each row is two bytes, low bitplane first. Bit 7 is the leftmost pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Tile([u8; TILE_BYTES]);

impl Tile {
    pub const fn new(bytes: [u8; TILE_BYTES]) -> Self {
        Self(bytes)
    }

    /// Copy a tile out of a 16-byte slice.
    pub fn from_slice(bytes: &[u8]) -> Self {
        let mut raw = [0u8; TILE_BYTES];
        raw.copy_from_slice(&bytes[..TILE_BYTES]);
        Self(raw)
    }

    pub fn bytes(&self) -> &[u8; TILE_BYTES] {
        &self.0
    }

    /// 2-bit color index of pixel (`x`, `y`).
    ///
    /// Pixel `i = x + y * 8` lives in byte pair `i / 8 * 2` (low plane) and
    /// `i / 8 * 2 + 1` (high plane), at bit `7 - i % 8`.
    #[inline(always)]
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        debug_assert!(x < TILE_SIZE && y < TILE_SIZE);
        let i = x + y * TILE_SIZE;
        let shift = 7 - i % 8;
        let lo = self.0[i / 8 * 2];
        let hi = self.0[i / 8 * 2 + 1];
        ((lo >> shift) & 1) | (((hi >> shift) & 1) << 1)
    }

    /// All eight color indices of row `y`, left to right.
    pub fn row(&self, y: usize) -> [u8; TILE_SIZE] {
        let mut out = [0u8; TILE_SIZE];
        for (x, px) in out.iter_mut().enumerate() {
            *px = self.pixel(x, y);
        }
        out
    }
}
