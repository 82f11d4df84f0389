//! Tile background composition and presentation for Game Boy style video.
//!
//! The core turns a VRAM snapshot (packed 2-bit tiles, a 32×32 tile index
//! map, scroll registers) into a logical frame, then resamples that frame or
//! an upstream 15-bit color frame onto a fixed-size output surface.
//! Frontends own the surface and call into [`frame::FrameRenderer`] once per
//! emulated frame.

/// Scrolled background decoding and VRAM debug views.
pub mod background;

/// Packed 15-bit color samples and output pixel packing.
pub mod color;

/// Per-frame decode and present pipeline.
pub mod frame;

/// Fixed-size pixel buffers.
pub mod framebuffer;

/// LCD control and scroll register inputs.
pub mod lcd;

/// Four-entry color palettes.
pub mod palette;

/// Nearest-neighbor presentation onto the output surface.
pub mod present;

/// 2bpp tile decoding.
pub mod tile;

/// Video RAM snapshot and bounds-checked tile views.
pub mod vram;
