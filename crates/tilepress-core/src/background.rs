use crate::framebuffer::FrameBuffer;
use crate::lcd::{LcdControl, Scroll};
use crate::palette::Palette;
use crate::tile::TILE_SIZE;
use crate::vram::{MAP_TILES, TileData, TileMap, VRAM_TILE_COUNT, Vram};

/// Visible LCD area.
pub const SCREEN_WIDTH: usize = 160;
pub const SCREEN_HEIGHT: usize = 144;

/// Side of the full scrollable background in pixels.
pub const CANVAS_SIZE: usize = MAP_TILES * TILE_SIZE;

// Tile sheet layout, 16 tiles across and 24 down
const SHEET_TILES_PER_ROW: usize = 16;
const SHEET_ROWS: usize = VRAM_TILE_COUNT / SHEET_TILES_PER_ROW;

/// Scrolled background plane: a tile index map, the tile data it indexes,
/// and the scroll offset applied before clipping to the viewport.
#[derive(Clone, Copy, Debug)]
pub struct BackgroundLayer<'a> {
    map: TileMap<'a>,
    tiles: TileData<'a>,
    scroll: Scroll,
}

impl<'a> BackgroundLayer<'a> {
    pub fn new(map: TileMap<'a>, tiles: TileData<'a>, scroll: Scroll) -> Self {
        Self { map, tiles, scroll }
    }

    /// Select map and tile data from LCDC bits 3 and 4.
    pub fn from_vram(vram: &'a Vram, lcdc: LcdControl, scroll: Scroll) -> Self {
        Self::new(
            vram.tile_map(lcdc.bg_map()),
            vram.tile_data(lcdc.tile_addressing()),
            scroll,
        )
    }

    pub fn scroll(&self) -> Scroll {
        self.scroll
    }

    /// Paint every scrolled-in background pixel of `target`.
    ///
    /// Canvas coordinates wrap at 256 after scrolling. Pixels that land
    /// outside `target` are dropped, and pixels that receive no write keep
    /// their previous value.
    pub fn render<T: Copy>(&self, palette: &Palette<T>, target: &mut FrameBuffer<T>) {
        let width = target.width();
        let height = target.height();
        debug_assert!(width <= CANVAS_SIZE && height <= CANVAS_SIZE);

        for tile_y in 0..MAP_TILES {
            for tile_x in 0..MAP_TILES {
                let tile = self.tiles.tile(self.map.index(tile_x, tile_y));
                for y in 0..TILE_SIZE {
                    // u8 arithmetic is the mod-256 wrap
                    let screen_y = ((tile_y * TILE_SIZE + y) as u8).wrapping_sub(self.scroll.y);
                    let screen_y = screen_y as usize;
                    if screen_y >= height {
                        continue;
                    }
                    for x in 0..TILE_SIZE {
                        let screen_x =
                            ((tile_x * TILE_SIZE + x) as u8).wrapping_sub(self.scroll.x) as usize;
                        if screen_x >= width {
                            continue;
                        }
                        target.set(screen_x, screen_y, palette.color(tile.pixel(x, y)));
                    }
                }
            }
        }
    }
}

/// The whole 256×256 background selected by `lcdc`, unscrolled.
pub fn render_canvas<T: Copy>(
    vram: &Vram,
    lcdc: LcdControl,
    palette: &Palette<T>,
) -> FrameBuffer<T> {
    let mut canvas = FrameBuffer::new(CANVAS_SIZE, CANVAS_SIZE, palette.color(0));
    BackgroundLayer::from_vram(vram, lcdc, Scroll::default()).render(palette, &mut canvas);
    canvas
}

/// All 384 VRAM tiles in address order, 16 per row (128×192).
pub fn render_tile_sheet<T: Copy>(vram: &Vram, palette: &Palette<T>) -> FrameBuffer<T> {
    let mut sheet = FrameBuffer::new(
        SHEET_TILES_PER_ROW * TILE_SIZE,
        SHEET_ROWS * TILE_SIZE,
        palette.color(0),
    );
    for n in 0..VRAM_TILE_COUNT {
        let tile = vram.tile(n);
        let left = (n % SHEET_TILES_PER_ROW) * TILE_SIZE;
        let top = (n / SHEET_TILES_PER_ROW) * TILE_SIZE;
        for y in 0..TILE_SIZE {
            for (x, &color_id) in tile.row(y).iter().enumerate() {
                sheet.set(left + x, top + y, palette.color(color_id));
            }
        }
    }
    sheet
}
