mod config;
mod dump;
mod error;

use clap::{Parser, ValueEnum};
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;
use tilepress_core::{
    background::{SCREEN_HEIGHT, SCREEN_WIDTH, render_canvas, render_tile_sheet},
    frame::{ColorSource, FrameRenderer, VideoState},
    framebuffer::FrameBuffer,
    lcd::{LcdControl, Scroll},
    present::{PresentConfig, Presenter},
};

use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum View {
    /// Scaled output surface
    Screen,
    /// 160x144 frame before scaling
    Viewport,
    /// Whole 256x256 background map
    Canvas,
    /// All 384 tiles in VRAM
    Tiles,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Png,
    /// Native-endian 32-bit words, as written to a framebuffer device
    Raw,
}

#[derive(Parser)]
#[command(version, about = "Render Game Boy background frames from VRAM dumps")]
struct Args {
    /// Path to an 8 KiB VRAM dump (0x8000-0x9FFF)
    vram: PathBuf,

    /// Output file
    #[arg(short, long, default_value = "frame.png")]
    output: PathBuf,

    /// LCD control register (LCDC)
    #[arg(long, value_parser = parse_byte, default_value = "0x91")]
    lcdc: u8,

    /// Background scroll X (SCX)
    #[arg(long, value_parser = parse_byte, default_value = "0")]
    scx: u8,

    /// Background scroll Y (SCY)
    #[arg(long, value_parser = parse_byte, default_value = "0")]
    scy: u8,

    /// Background palette register (BGP), used when the config enables it
    #[arg(long, value_parser = parse_byte, default_value = "0xE4")]
    bgp: u8,

    /// Present a 160x144 little-endian RGB555 frame instead of decoding VRAM
    #[arg(long)]
    rgb555: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = View::Screen)]
    view: View,

    #[arg(long, value_enum, default_value_t = Format::Png)]
    format: Format,

    /// Number of frames to run before writing the last one
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective config back to the config path
    #[arg(long)]
    save_config: bool,
}

fn parse_byte(s: &str) -> Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("`{s}` is not a byte value: {e}"))
}

fn render_frames(
    renderer: &mut FrameRenderer,
    video: &VideoState<'_>,
    config: PresentConfig,
    frames: u32,
) -> FrameBuffer<u32> {
    let mut presenter = Presenter::new(config);
    for _ in 0..frames.max(1) {
        renderer.render_frame(video, &mut presenter);
    }
    presenter.into_surface()
}

fn run(args: &Args) -> Result<(), Error> {
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(config::default_config_path);
    let cfg = config::load_from_file(&config_path);
    if args.save_config {
        config::save_to_file(&config_path, &cfg).map_err(|e| Error::io(&config_path, e))?;
        info!("Saved config to {}", config_path.display());
    }

    let vram = dump::load_vram(&args.vram)?;
    info!("Loaded VRAM dump {}", args.vram.display());
    let colors = match &args.rgb555 {
        Some(path) => {
            let frame = dump::load_rgb555(path)?;
            info!("Loaded RGB555 frame {}", path.display());
            Some(frame)
        }
        None => None,
    };

    let video = VideoState {
        vram: &vram,
        lcdc: LcdControl(args.lcdc),
        scroll: Scroll::new(args.scx, args.scy),
        bgp: args.bgp,
        color: match &colors {
            Some(frame) => ColorSource::Rgb555(frame),
            None => ColorSource::Monochrome,
        },
    };

    let mut renderer = FrameRenderer::new();
    renderer.set_palette(cfg.palette.palette());
    renderer.set_apply_bgp(cfg.palette.apply_bgp);
    let palette = renderer.display_palette(args.bgp);

    let image = match args.view {
        View::Screen => render_frames(
            &mut renderer,
            &video,
            cfg.present.to_present_config(),
            args.frames,
        ),
        View::Viewport => render_frames(
            &mut renderer,
            &video,
            PresentConfig::scaled(SCREEN_WIDTH, SCREEN_HEIGHT),
            args.frames,
        ),
        View::Canvas => render_canvas(&vram, video.lcdc, &palette),
        View::Tiles => render_tile_sheet(&vram, &palette),
    };

    match args.format {
        Format::Png => dump::write_png(&args.output, &image)?,
        Format::Raw => dump::write_raw(&args.output, &image)?,
    }
    info!(
        "Wrote {}x{} {:?} to {}",
        image.width(),
        image.height(),
        args.view,
        args.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
