//! PNG export of bitmap elements.

use image::{GrayImage, Luma};
use std::io::Cursor;

use crate::document::Bitmap;
use crate::error::BoletaError;

/// Render a bitmap as a grayscale image (black dots = 0, white = 255).
pub fn bitmap_to_image(bitmap: &Bitmap) -> GrayImage {
    let width = bitmap.width_dots;
    let height = bitmap.height_dots;
    let width_bytes = bitmap.width_bytes();
    let data = bitmap.to_row_major();

    let mut img = GrayImage::new(width, height);
    for y in 0..height as usize {
        for x in 0..width as usize {
            let is_black = data
                .get(y * width_bytes + x / 8)
                .is_some_and(|b| (b >> (7 - (x % 8))) & 1 == 1);
            let color = if is_black { 0u8 } else { 255u8 };
            img.put_pixel(x as u32, y as u32, Luma([color]));
        }
    }
    img
}

/// Encode a bitmap as PNG bytes.
pub fn bitmap_to_png(bitmap: &Bitmap) -> Result<Vec<u8>, BoletaError> {
    let img = bitmap_to_image(bitmap);
    let mut png_bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut png_bytes), image::ImageFormat::Png)
        .map_err(|e| BoletaError::Image(format!("PNG encoding failed: {}", e)))?;
    Ok(png_bytes)
}
