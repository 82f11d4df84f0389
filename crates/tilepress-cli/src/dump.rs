use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use tilepress_core::background::{SCREEN_HEIGHT, SCREEN_WIDTH};
use tilepress_core::framebuffer::FrameBuffer;
use tilepress_core::vram::{VRAM_SIZE, Vram};

use crate::error::Error;

/// Bytes in a 160×144 little-endian RGB555 frame.
pub const RGB555_FRAME_SIZE: usize = SCREEN_WIDTH * SCREEN_HEIGHT * 2;

fn read(path: &Path) -> Result<Vec<u8>, Error> {
    fs::read(path).map_err(|e| Error::io(path, e))
}

/// Load a raw dump of 0x8000-0x9FFF.
pub fn load_vram(path: &Path) -> Result<Vram, Error> {
    let data = read(path)?;
    Vram::from_slice(&data).ok_or(Error::DumpSize {
        what: "VRAM",
        expected: VRAM_SIZE,
        actual: data.len(),
    })
}

/// Load a 160×144 frame of little-endian RGB555 samples.
pub fn load_rgb555(path: &Path) -> Result<FrameBuffer<u16>, Error> {
    let data = read(path)?;
    if data.len() != RGB555_FRAME_SIZE {
        return Err(Error::DumpSize {
            what: "RGB555",
            expected: RGB555_FRAME_SIZE,
            actual: data.len(),
        });
    }
    let samples = data
        .chunks_exact(2)
        .map(|b| u16::from_le_bytes([b[0], b[1]]))
        .collect();
    Ok(FrameBuffer::from_pixels(SCREEN_WIDTH, SCREEN_HEIGHT, samples))
}

/// Write `image` as an 8-bit RGBA PNG.
pub fn write_png(path: &Path, image: &FrameBuffer<u32>) -> Result<(), Error> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut encoder = png::Encoder::new(
        BufWriter::new(file),
        image.width() as u32,
        image.height() as u32,
    );
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let data: Vec<u8> = image
        .pixels()
        .iter()
        .flat_map(|px| px.to_be_bytes())
        .collect();
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&data)?;
    writer.finish()?;
    Ok(())
}

/// Write the surface words as-is, native endian.
pub fn write_raw(path: &Path, image: &FrameBuffer<u32>) -> Result<(), Error> {
    fs::write(path, image.as_bytes()).map_err(|e| Error::io(path, e))
}
