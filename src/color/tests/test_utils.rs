use crate::decoder::PixelBuffer;

/// Builds a single-row RGB buffer from a list of pixels
pub fn rgb_row(pixels: &[[u8; 3]]) -> PixelBuffer {
    let rows: Vec<&[u8]> = pixels.iter().map(|p| &p[..]).collect();
    PixelBuffer::from_pixels(1, pixels.len(), &rows).unwrap()
}

/// The 2x2 image red, red, green, blue
pub fn two_by_two_rgb() -> PixelBuffer {
    let pixels: [&[u8]; 4] = [&[255, 0, 0], &[255, 0, 0], &[0, 255, 0], &[0, 0, 255]];
    PixelBuffer::from_pixels(2, 2, &pixels).unwrap()
}

/// A deterministic pseudo-random RGBA buffer with a small palette
///
/// Values are drawn from a linear congruential sequence folded into
/// `palette_size` distinct colors so counts collide often.
pub fn noisy_rgba(height: usize, width: usize, palette_size: u32, seed: u32) -> PixelBuffer {
    let mut state = seed;
    let mut data = Vec::with_capacity(height * width * 4);

    for _ in 0..height * width {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let index = (state >> 16) % palette_size;
        data.extend_from_slice(&[(index * 37 % 256) as u8, (index * 11 % 256) as u8, (index % 256) as u8, 255]);
    }

    PixelBuffer::new(height, width, 4, data).unwrap()
}
