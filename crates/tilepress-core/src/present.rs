use log::debug;

use crate::color::{BLACK, Rgb555};
use crate::framebuffer::FrameBuffer;
use crate::palette::Palette;

/// How output rows are placed on the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowOrder {
    /// Output row `y` lands on surface row `offset + y`.
    TopDown { offset: isize },
    /// Output row `y` lands on surface row `origin - y`.
    BottomUp { origin: isize },
}

impl RowOrder {
    pub fn surface_row(self, y: usize) -> isize {
        match self {
            Self::TopDown { offset } => offset + y as isize,
            Self::BottomUp { origin } => origin - y as isize,
        }
    }
}

impl Default for RowOrder {
    fn default() -> Self {
        Self::TopDown { offset: 0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresentConfig {
    /// Resampled image size.
    pub output_width: usize,
    pub output_height: usize,
    /// Size of the surface the image is placed on.
    pub surface_width: usize,
    pub surface_height: usize,
    pub rows: RowOrder,
}

impl PresentConfig {
    /// Output of `width × height` filling a surface of the same size.
    pub const fn scaled(width: usize, height: usize) -> Self {
        Self {
            output_width: width,
            output_height: height,
            surface_width: width,
            surface_height: height,
            rows: RowOrder::TopDown { offset: 0 },
        }
    }
}

impl Default for PresentConfig {
    fn default() -> Self {
        Self::scaled(240, 216)
    }
}

/// A logical-resolution frame waiting to be presented.
#[derive(Clone, Copy, Debug)]
pub enum PixelSource<'a> {
    /// 2-bit color indices resolved through a palette.
    Indexed {
        pixels: &'a FrameBuffer<u8>,
        palette: Palette<u32>,
    },
    /// Packed 15-bit color samples.
    Rgb555(&'a FrameBuffer<u16>),
}

impl PixelSource<'_> {
    pub fn width(&self) -> usize {
        match self {
            Self::Indexed { pixels, .. } => pixels.width(),
            Self::Rgb555(pixels) => pixels.width(),
        }
    }

    pub fn height(&self) -> usize {
        match self {
            Self::Indexed { pixels, .. } => pixels.height(),
            Self::Rgb555(pixels) => pixels.height(),
        }
    }
}

/// Nearest-neighbor source coordinate for output coordinate `out`, using
/// truncating integer division.
#[inline(always)]
pub fn nearest(out: usize, src_len: usize, out_len: usize) -> usize {
    out * src_len / out_len
}

/// Presentation context: owns the output surface and the placement rules.
///
/// Created once by the frontend and handed every frame's source. The surface
/// is released with the presenter.
#[derive(Debug)]
pub struct Presenter {
    config: PresentConfig,
    surface: FrameBuffer<u32>,
}

impl Presenter {
    pub fn new(config: PresentConfig) -> Self {
        debug!(
            "presenter {}x{} on {}x{} surface, rows {:?}",
            config.output_width,
            config.output_height,
            config.surface_width,
            config.surface_height,
            config.rows
        );
        Self {
            config,
            surface: FrameBuffer::new(config.surface_width, config.surface_height, BLACK),
        }
    }

    pub fn config(&self) -> &PresentConfig {
        &self.config
    }

    pub fn surface(&self) -> &FrameBuffer<u32> {
        &self.surface
    }

    pub fn into_surface(self) -> FrameBuffer<u32> {
        self.surface
    }

    pub fn clear(&mut self, color: u32) {
        self.surface.fill(color);
    }

    /// Resample `source` onto the surface.
    ///
    /// Surface pixels outside the placed output keep their previous value.
    pub fn present(&mut self, source: &PixelSource<'_>) {
        match *source {
            PixelSource::Indexed { pixels, palette } => {
                self.resample(pixels, |index| palette.color(index))
            }
            PixelSource::Rgb555(pixels) => self.resample(pixels, |raw| Rgb555(raw).to_rgba()),
        }
    }

    fn resample<S: Copy>(&mut self, src: &FrameBuffer<S>, resolve: impl Fn(S) -> u32) {
        let PresentConfig {
            output_width,
            output_height,
            rows,
            ..
        } = self.config;
        let src_width = src.width();
        let src_height = src.height();
        let surface_height = self.surface.height() as isize;
        let columns = output_width.min(self.surface.width());

        for y in 0..output_height {
            let dst_y = rows.surface_row(y);
            if !(0..surface_height).contains(&dst_y) {
                continue;
            }
            let src_row = src.row(nearest(y, src_height, output_height));
            let dst_row = self.surface.row_mut(dst_y as usize);
            for (x, dst) in dst_row[..columns].iter_mut().enumerate() {
                *dst = resolve(src_row[nearest(x, src_width, output_width)]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: usize, height: usize) -> FrameBuffer<u8> {
        let pixels = (0..width * height).map(|i| (i % 4) as u8).collect();
        FrameBuffer::from_pixels(width, height, pixels)
    }

    #[test]
    fn upscale_corners_hit_first_and_last_source_pixel() {
        assert_eq!(nearest(0, 160, 240), 0);
        assert_eq!(nearest(0, 144, 216), 0);
        assert_eq!(nearest(239, 160, 240), 159);
        assert_eq!(nearest(215, 144, 216), 143);
    }

    #[test]
    fn three_to_two_upscale_duplicates_every_other_pixel() {
        let cols: Vec<usize> = (0..6).map(|x| nearest(x, 4, 6)).collect();
        assert_eq!(cols, [0, 0, 1, 2, 2, 3]);
    }

    #[test]
    fn downscale_skips_source_pixels() {
        let cols: Vec<usize> = (0..2).map(|x| nearest(x, 4, 2)).collect();
        assert_eq!(cols, [0, 2]);
    }

    #[test]
    fn indexed_source_resolves_through_palette() {
        let src = gradient(4, 1);
        let mut presenter = Presenter::new(PresentConfig::scaled(4, 1));
        presenter.present(&PixelSource::Indexed {
            pixels: &src,
            palette: Palette::MONOCHROME,
        });
        assert_eq!(
            presenter.surface().pixels(),
            &[0xFFFFFFFF, 0xAAAAAAAA, 0x66666666, 0x11111111]
        );
    }

    #[test]
    fn rgb555_source_uses_shift_expansion() {
        let src = FrameBuffer::from_pixels(2, 1, vec![0x0000, 0x001F]);
        let mut presenter = Presenter::new(PresentConfig::scaled(2, 1));
        presenter.present(&PixelSource::Rgb555(&src));
        assert_eq!(presenter.surface().pixels(), &[0x000000FF, 0xF80000FF]);
    }

    #[test]
    fn bottom_up_rows_are_flipped_around_origin() {
        let src = FrameBuffer::from_pixels(1, 2, vec![0u8, 3]);
        let config = PresentConfig {
            rows: RowOrder::BottomUp { origin: 2 },
            surface_height: 4,
            ..PresentConfig::scaled(1, 2)
        };
        let mut presenter = Presenter::new(config);
        presenter.present(&PixelSource::Indexed {
            pixels: &src,
            palette: Palette::MONOCHROME,
        });
        assert_eq!(
            presenter.surface().pixels(),
            &[BLACK, 0x11111111, 0xFFFFFFFF, BLACK]
        );
    }

    #[test]
    fn rows_placed_off_surface_are_skipped() {
        let src = gradient(2, 3);
        let config = PresentConfig {
            rows: RowOrder::TopDown { offset: 2 },
            ..PresentConfig::scaled(2, 3)
        };
        let mut presenter = Presenter::new(config);
        presenter.present(&PixelSource::Indexed {
            pixels: &src,
            palette: Palette::MONOCHROME,
        });
        let surface = presenter.surface();
        assert_eq!(surface.row(0), &[BLACK, BLACK]);
        assert_eq!(surface.row(1), &[BLACK, BLACK]);
        assert_eq!(surface.row(2), &[0xFFFFFFFF, 0xAAAAAAAA]);
    }

    #[test]
    fn output_wider_than_surface_is_clipped() {
        let src = gradient(4, 1);
        let config = PresentConfig {
            surface_width: 2,
            ..PresentConfig::scaled(4, 1)
        };
        let mut presenter = Presenter::new(config);
        presenter.present(&PixelSource::Indexed {
            pixels: &src,
            palette: Palette::MONOCHROME,
        });
        assert_eq!(presenter.surface().pixels(), &[0xFFFFFFFF, 0xAAAAAAAA]);
    }
}
