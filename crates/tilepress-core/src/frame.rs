use log::trace;

use crate::background::{BackgroundLayer, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::framebuffer::FrameBuffer;
use crate::lcd::{LcdControl, Scroll};
use crate::palette::Palette;
use crate::present::{PixelSource, Presenter};
use crate::vram::Vram;

/// Color index the plane is cleared to before the background is drawn.
const BACKGROUND_INDEX: u8 = 0;

/// Where a frame's colors come from.
#[derive(Clone, Copy, Debug)]
pub enum ColorSource<'a> {
    /// Decode the background into 2-bit indices.
    Monochrome,
    /// Present an already resolved 15-bit color frame.
    Rgb555(&'a FrameBuffer<u16>),
}

/// Emulator state read once per frame.
#[derive(Clone, Copy, Debug)]
pub struct VideoState<'a> {
    pub vram: &'a Vram,
    pub lcdc: LcdControl,
    pub scroll: Scroll,
    pub bgp: u8,
    pub color: ColorSource<'a>,
}

impl<'a> VideoState<'a> {
    /// Monochrome state with post-boot registers.
    pub fn monochrome(vram: &'a Vram) -> Self {
        Self {
            vram,
            lcdc: LcdControl::POST_BOOT,
            scroll: Scroll::default(),
            bgp: 0xE4,
            color: ColorSource::Monochrome,
        }
    }
}

/// Drives decode and presentation once per emulated frame.
#[derive(Debug)]
pub struct FrameRenderer {
    plane: FrameBuffer<u8>,
    palette: Palette<u32>,
    apply_bgp: bool,
    frame_counter: u64,
}

impl FrameRenderer {
    pub fn new() -> Self {
        Self::with_viewport(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    pub fn with_viewport(width: usize, height: usize) -> Self {
        Self {
            plane: FrameBuffer::new(width, height, BACKGROUND_INDEX),
            palette: Palette::MONOCHROME,
            apply_bgp: false,
            frame_counter: 0,
        }
    }

    pub fn set_palette(&mut self, palette: Palette<u32>) {
        self.palette = palette;
    }

    /// Remap colors through BGP before presenting.
    pub fn set_apply_bgp(&mut self, apply: bool) {
        self.apply_bgp = apply;
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frame_counter
    }

    /// The 2-bit index plane from the latest monochrome frame.
    pub fn plane(&self) -> &FrameBuffer<u8> {
        &self.plane
    }

    /// Clear the index plane and draw the background into it.
    ///
    /// With the LCD or the background disabled the plane stays blank.
    pub fn render_background(&mut self, vram: &Vram, lcdc: LcdControl, scroll: Scroll) {
        self.plane.fill(BACKGROUND_INDEX);
        if !lcdc.lcd_enabled() || !lcdc.bg_enabled() {
            return;
        }
        BackgroundLayer::from_vram(vram, lcdc, scroll).render(&Palette::IDENTITY, &mut self.plane);
    }

    /// Palette used to present monochrome frames for `bgp`.
    pub fn display_palette(&self, bgp: u8) -> Palette<u32> {
        if self.apply_bgp {
            self.palette.with_shades(bgp)
        } else {
            self.palette
        }
    }

    pub fn render_frame(&mut self, video: &VideoState<'_>, presenter: &mut Presenter) {
        self.frame_counter = self.frame_counter.wrapping_add(1);
        trace!(
            "frame {}: {:?} map {:?} scroll ({}, {})",
            self.frame_counter,
            video.lcdc.tile_addressing(),
            video.lcdc.bg_map(),
            video.scroll.x,
            video.scroll.y
        );

        match video.color {
            ColorSource::Monochrome => {
                self.render_background(video.vram, video.lcdc, video.scroll);
                let palette = self.display_palette(video.bgp);
                presenter.present(&PixelSource::Indexed {
                    pixels: &self.plane,
                    palette,
                });
            }
            ColorSource::Rgb555(pixels) => presenter.present(&PixelSource::Rgb555(pixels)),
        }
    }
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new()
    }
}
