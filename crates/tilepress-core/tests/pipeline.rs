use tilepress_core::{
    background::{BackgroundLayer, SCREEN_HEIGHT, SCREEN_WIDTH},
    color::Rgb555,
    frame::{ColorSource, FrameRenderer, VideoState},
    framebuffer::FrameBuffer,
    lcd::{LcdControl, Scroll},
    palette::Palette,
    present::{PixelSource, PresentConfig, Presenter, RowOrder},
    vram::Vram,
};

const SENTINEL: u32 = 0xDEADBEEF;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Map 0 cells cycle through tiles 0-3, each a solid color equal to its
/// number. Cell (0,0) uses tile 4, whose top-left pixel alone is color 3.
fn checkerboard_vram() -> Vram {
    let mut vram = Vram::new();
    for color_id in 0..4u8 {
        let lo = if color_id & 1 != 0 { 0xFF } else { 0x00 };
        let hi = if color_id & 2 != 0 { 0xFF } else { 0x00 };
        vram.load(0x8000 + color_id as u16 * 16, &[lo, hi].repeat(8));
    }
    vram.write(0x8040, 0x80);
    vram.write(0x8041, 0x80);
    for cell in 0..32 * 32u16 {
        let (x, y) = (cell % 32, cell / 32);
        vram.write(0x9800 + cell, ((x + y) % 4) as u8);
    }
    vram.write(0x9800, 4);
    vram
}

#[test]
fn full_pipeline_is_idempotent() {
    init_logging();
    let vram = checkerboard_vram();
    let video = VideoState {
        scroll: Scroll::new(37, 201),
        ..VideoState::monochrome(&vram)
    };

    let run = || {
        let mut renderer = FrameRenderer::new();
        let mut presenter = Presenter::new(PresentConfig::default());
        renderer.render_frame(&video, &mut presenter);
        presenter.surface().as_bytes().to_vec()
    };
    assert_eq!(run(), run());
}

#[test]
fn repeated_frames_through_one_renderer_match() {
    let vram = checkerboard_vram();
    let video = VideoState::monochrome(&vram);
    let mut renderer = FrameRenderer::new();
    let mut presenter = Presenter::new(PresentConfig::default());

    renderer.render_frame(&video, &mut presenter);
    let first = presenter.surface().clone();
    presenter.clear(0);
    renderer.render_frame(&video, &mut presenter);
    assert_eq!(&first, presenter.surface());
}

#[test]
fn scrolled_tile_is_dropped_not_wrapped_onto_viewport() {
    let vram = checkerboard_vram();
    let mut fb = FrameBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT, 0xFFu8);
    BackgroundLayer::from_vram(&vram, LcdControl::POST_BOOT, Scroll::new(4, 0))
        .render(&Palette::IDENTITY, &mut fb);

    // cell (0,0) columns 0-3 land on canvas x 252-255, outside the viewport
    for y in 0..8 {
        assert_eq!(fb.get(0, y), Some(0), "row {y}");
    }
    // canvas x 160 is the first column of cell (20, y) and lands on screen x 156
    assert_eq!(fb.get(156, 8), Some((20 + 1) % 4));
    assert_eq!(fb.get(155, 8), Some((19 + 1) % 4));
    assert!(fb.pixels().iter().all(|&p| p != 0xFF));
}

#[test]
fn surface_outside_placed_output_keeps_sentinel() {
    let vram = checkerboard_vram();
    // Handheld layout: 240x216 image flipped onto rows 268 down to 53 of a
    // 240x320 surface.
    let config = PresentConfig {
        surface_width: 240,
        surface_height: 320,
        rows: RowOrder::BottomUp { origin: 268 },
        ..PresentConfig::scaled(240, 216)
    };
    let mut presenter = Presenter::new(config);
    presenter.clear(SENTINEL);
    FrameRenderer::new().render_frame(&VideoState::monochrome(&vram), &mut presenter);

    let surface = presenter.surface();
    for y in (0..53).chain(269..320) {
        assert!(surface.row(y).iter().all(|&p| p == SENTINEL), "row {y}");
    }
    for y in 53..=268 {
        assert!(surface.row(y).iter().all(|&p| p != SENTINEL), "row {y}");
    }
    // output row 0 (top of the logical frame) sits at surface row 268;
    // the marker pixel of cell (0,0) is color 3
    assert_eq!(surface.get(0, 268), Some(Palette::MONOCHROME.color(3)));
}

#[test]
fn output_corner_samples_last_source_pixel() {
    let samples = (0..SCREEN_WIDTH * SCREEN_HEIGHT)
        .map(|i| (i & 0x7FFF) as u16)
        .collect();
    let src = FrameBuffer::from_pixels(SCREEN_WIDTH, SCREEN_HEIGHT, samples);
    let mut presenter = Presenter::new(PresentConfig::scaled(240, 216));
    presenter.present(&PixelSource::Rgb555(&src));

    let surface = presenter.surface();
    let at = |x: usize, y: usize| Rgb555(src.get(x, y).unwrap()).to_rgba();
    assert_eq!(surface.get(0, 0), Some(at(0, 0)));
    assert_eq!(surface.get(239, 215), Some(at(159, 143)));
    assert_eq!(surface.get(1, 1), Some(at(0, 0)));
    assert_eq!(surface.get(2, 2), Some(at(1, 1)));
}

#[test]
fn color_mode_expands_red_to_f8() {
    let vram = Vram::new();
    let colors = FrameBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT, 0x001Fu16);
    let video = VideoState {
        color: ColorSource::Rgb555(&colors),
        ..VideoState::monochrome(&vram)
    };
    let mut presenter = Presenter::new(PresentConfig::default());
    FrameRenderer::new().render_frame(&video, &mut presenter);

    let [r, g, b, a] = presenter.surface().pixels()[0].to_be_bytes();
    assert_eq!((r, g, b, a), (0xF8, 0, 0, 0xFF));
}

#[test]
fn signed_addressing_reads_tile_block_below_base() {
    let mut vram = Vram::new();
    vram.load(0x9000 - 128 * 16, &[0xFF, 0x00].repeat(8));
    // LCD on, BG on, signed tile data, map 0
    let lcdc = LcdControl(0x81);
    for cell in 0..32 * 32u16 {
        vram.write(0x9800 + cell, 0x80);
    }
    let mut renderer = FrameRenderer::new();
    renderer.render_background(&vram, lcdc, Scroll::default());
    assert!(renderer.plane().pixels().iter().all(|&p| p == 1));
}
