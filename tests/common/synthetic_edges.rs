/// Pixels of a vertical stroke at `x` covering `y0..=y1`, `thickness` wide.
pub fn vertical_stroke(x: u32, y0: u32, y1: u32, thickness: u32) -> Vec<[u32; 2]> {
    (y0..=y1)
        .flat_map(|y| (0..thickness).map(move |dx| [x + dx, y]))
        .collect()
}

/// Pixels of a horizontal stroke at `y` covering `x0..=x1`, `thickness` tall.
pub fn horizontal_stroke(y: u32, x0: u32, x1: u32, thickness: u32) -> Vec<[u32; 2]> {
    (x0..=x1)
        .flat_map(|x| (0..thickness).map(move |dy| [x, y + dy]))
        .collect()
}

/// Row-major 8-bit mask with `value` at every listed pixel.
pub fn mask_u8(width: u32, height: u32, pixels: &[[u32; 2]], value: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "mask dimensions must be positive");
    let mut mask = vec![0u8; (width * height) as usize];
    for &[x, y] in pixels {
        mask[(y * width + x) as usize] = value;
    }
    mask
}

/// A Mondrian-like layout: two full-height verticals, one full-width
/// horizontal and a shorter horizontal between the verticals.
pub fn mondrian_layout() -> Vec<[u32; 2]> {
    let mut pixels = Vec::new();
    pixels.extend(vertical_stroke(60, 4, 195, 2));
    pixels.extend(vertical_stroke(210, 8, 190, 2));
    pixels.extend(horizontal_stroke(70, 3, 296, 2));
    pixels.extend(horizontal_stroke(150, 64, 206, 2));
    pixels
}
