use crate::lcd::{MapSelect, TileAddressing};
use crate::tile::{TILE_BYTES, Tile};

/// Size of video RAM (0x8000-0x9FFF).
pub const VRAM_SIZE: usize = 0x2000;
/// CPU address of the first VRAM byte.
pub const VRAM_START: u16 = 0x8000;

/// Tiles stored in VRAM (0x8000-0x97FF).
pub const VRAM_TILE_COUNT: usize = 384;

/// Tiles reachable through one addressing mode.
pub const TILES_PER_REGION: usize = 256;
const TILE_REGION_SIZE: usize = TILES_PER_REGION * TILE_BYTES;

// VRAM layout constants (offsets from 0x8000)
const TILE_DATA_UNSIGNED_BASE: usize = 0x0000;
const TILE_DATA_SIGNED_BASE: usize = 0x1000;
const BG_MAP_0_BASE: usize = 0x1800;
const BG_MAP_1_BASE: usize = 0x1C00;

/// Tile index maps are 32×32 cells.
pub const MAP_TILES: usize = 32;
const MAP_SIZE: usize = MAP_TILES * MAP_TILES;

/// Snapshot of video RAM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vram {
    bytes: [u8; VRAM_SIZE],
}

impl Vram {
    pub fn new() -> Self {
        Self {
            bytes: [0; VRAM_SIZE],
        }
    }

    /// Build from a raw dump of 0x8000-0x9FFF. Returns `None` unless the dump
    /// is exactly `VRAM_SIZE` bytes.
    pub fn from_slice(data: &[u8]) -> Option<Self> {
        let bytes: [u8; VRAM_SIZE] = data.try_into().ok()?;
        Some(Self { bytes })
    }

    pub fn bytes(&self) -> &[u8; VRAM_SIZE] {
        &self.bytes
    }

    /// Read by CPU address (0x8000-0x9FFF).
    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[Self::offset(addr)]
    }

    /// Write by CPU address (0x8000-0x9FFF).
    pub fn write(&mut self, addr: u16, val: u8) {
        self.bytes[Self::offset(addr)] = val;
    }

    /// Copy `data` to consecutive addresses starting at `addr`.
    pub fn load(&mut self, addr: u16, data: &[u8]) {
        let start = Self::offset(addr);
        self.bytes[start..start + data.len()].copy_from_slice(data);
    }

    fn offset(addr: u16) -> usize {
        debug_assert!(
            (VRAM_START..=0x9FFF).contains(&addr),
            "{addr:#06X} is not a VRAM address"
        );
        addr.wrapping_sub(VRAM_START) as usize
    }

    /// Tile data reachable under `addressing`.
    pub fn tile_data(&self, addressing: TileAddressing) -> TileData<'_> {
        let start = match addressing {
            TileAddressing::Unsigned => TILE_DATA_UNSIGNED_BASE,
            TileAddressing::Signed => TILE_DATA_SIGNED_BASE - 128 * TILE_BYTES,
        };
        TileData::new(&self.bytes[start..start + TILE_REGION_SIZE], addressing)
    }

    pub fn tile_map(&self, select: MapSelect) -> TileMap<'_> {
        let start = match select {
            MapSelect::Low => BG_MAP_0_BASE,
            MapSelect::High => BG_MAP_1_BASE,
        };
        TileMap::new(&self.bytes[start..start + MAP_SIZE])
    }

    /// Tile `n` of the 384 stored tiles, counting from 0x8000.
    pub fn tile(&self, n: usize) -> Tile {
        debug_assert!(n < VRAM_TILE_COUNT);
        let start = n * TILE_BYTES;
        Tile::from_slice(&self.bytes[start..start + TILE_BYTES])
    }
}

impl Default for Vram {
    fn default() -> Self {
        Self::new()
    }
}

/// The 256 tiles one addressing mode can reach.
///
/// `region` always starts at the lowest reachable tile, so every tile number
/// the mode can produce maps to an offset inside it.
#[derive(Clone, Copy, Debug)]
pub struct TileData<'a> {
    region: &'a [u8],
    addressing: TileAddressing,
}

impl<'a> TileData<'a> {
    /// `region` holds 256 tiles. In signed mode tile 0 sits at its midpoint.
    pub fn new(region: &'a [u8], addressing: TileAddressing) -> Self {
        debug_assert_eq!(region.len(), TILE_REGION_SIZE, "tile region must hold 256 tiles");
        Self { region, addressing }
    }

    pub fn addressing(&self) -> TileAddressing {
        self.addressing
    }

    /// Byte offset into the region of the tile selected by map byte `raw`.
    #[inline(always)]
    pub fn offset(&self, raw: u8) -> usize {
        let origin = match self.addressing {
            TileAddressing::Unsigned => 0,
            TileAddressing::Signed => 128 * TILE_BYTES as isize,
        };
        let number = self.addressing.tile_number(raw) as isize;
        (origin + number * TILE_BYTES as isize) as usize
    }

    #[inline(always)]
    pub fn tile(&self, raw: u8) -> Tile {
        let start = self.offset(raw);
        Tile::from_slice(&self.region[start..start + TILE_BYTES])
    }
}

/// A 32×32 grid of tile index bytes.
#[derive(Clone, Copy, Debug)]
pub struct TileMap<'a> {
    cells: &'a [u8],
}

impl<'a> TileMap<'a> {
    pub fn new(cells: &'a [u8]) -> Self {
        debug_assert_eq!(cells.len(), MAP_SIZE, "tile map must be 32x32");
        Self { cells }
    }

    #[inline(always)]
    pub fn index(&self, tile_x: usize, tile_y: usize) -> u8 {
        self.cells[tile_x + tile_y * MAP_TILES]
    }
}
