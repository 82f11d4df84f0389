/// Row-major pixel buffer with a fixed size. The stride equals the width.
///
/// The same type backs the 2-bit index plane (`FrameBuffer<u8>`), the packed
/// color input (`FrameBuffer<u16>`) and the presented surface
/// (`FrameBuffer<u32>`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer<T> {
    width: usize,
    height: usize,
    pixels: Vec<T>,
}

impl<T: Copy> FrameBuffer<T> {
    /// Allocate a `width × height` buffer with every pixel set to `fill`.
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        debug_assert!(width > 0 && height > 0, "empty frame buffer");
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    /// Wrap existing pixel data. `pixels.len()` must equal `width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<T>) -> Self {
        assert_eq!(
            pixels.len(),
            width * height,
            "pixel data does not match {width}x{height}"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn fill(&mut self, value: T) {
        self.pixels.fill(value);
    }

    /// Returns `None` outside the buffer.
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        self.pixels[y * self.width + x] = value;
    }

    pub fn row(&self, y: usize) -> &[T] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        let start = y * self.width;
        &mut self.pixels[start..start + self.width]
    }

    pub fn pixels(&self) -> &[T] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<T> {
        self.pixels
    }
}

impl<T: bytemuck::Pod> FrameBuffer<T> {
    /// Native-endian view of the pixel words, as a framebuffer device takes them.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.pixels.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_outside_bounds_is_none() {
        let fb = FrameBuffer::new(4, 3, 7u8);
        assert_eq!(fb.get(3, 2), Some(7));
        assert_eq!(fb.get(4, 0), None);
        assert_eq!(fb.get(0, 3), None);
    }

    #[test]
    fn set_addresses_rows_by_width() {
        let mut fb = FrameBuffer::new(4, 3, 0u16);
        fb.set(1, 2, 0xBEEF);
        assert_eq!(fb.pixels()[2 * 4 + 1], 0xBEEF);
        assert_eq!(fb.row(2), &[0, 0xBEEF, 0, 0]);
    }

    #[test]
    fn byte_view_covers_every_word() {
        let fb = FrameBuffer::new(2, 2, 0x11223344u32);
        let bytes = fb.as_bytes();
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[..4], &0x11223344u32.to_ne_bytes());
    }

    #[test]
    #[should_panic]
    fn from_pixels_rejects_wrong_length() {
        let _ = FrameBuffer::from_pixels(2, 2, vec![0u8; 3]);
    }
}
