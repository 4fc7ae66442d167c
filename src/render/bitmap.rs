//! # Bitmap Format Conversion
//!
//! Pure transforms between the bit image layouts found in print streams and
//! the layout raster consumers expect.
//!
//! ## Column-Major → Row-Major
//!
//! Downloaded bit images (`GS *`) arrive one column at a time, each byte
//! covering 8 vertical dots (bit 7 = top). Raster consumers want rows, each
//! byte covering 8 horizontal dots (bit 7 = left):
//!
//! ```text
//!   column-major (y = 1)          row-major (stride = x)
//!
//!   d[c] bit k  ──────────►  row k, column c
//!                            dst[k * x + c / 8] |= 0x80 >> (c % 8)
//! ```
//!
//! ## Padded Raster
//!
//! Device bitmap formats often require each row to start on a 4-byte
//! boundary. [`to_padded_raster`] copies rows into such a buffer, leaving
//! the padding white.

/// Transpose a column-major image to row-major.
///
/// - `width_bytes`: horizontal size in bytes (`width_bytes * 8` columns)
/// - `height_bytes`: vertical size in bytes (`height_bytes * 8` rows)
///
/// Source bytes missing from a short input are treated as white.
///
/// ## Example
///
/// ```
/// use boleta::render::bitmap::column_to_raster;
///
/// // 8x8 image with only the top-left dot set
/// let mut src = vec![0u8; 8];
/// src[0] = 0x80;
/// let dst = column_to_raster(&src, 1, 1);
/// assert_eq!(dst[0], 0x80);
/// assert!(dst[1..].iter().all(|&b| b == 0));
/// ```
pub fn column_to_raster(src: &[u8], width_bytes: usize, height_bytes: usize) -> Vec<u8> {
    let width_dots = width_bytes * 8;
    let height_dots = height_bytes * 8;
    let mut dst = vec![0u8; width_bytes * height_dots];

    for col in 0..width_dots {
        for v in 0..height_bytes {
            let Some(&byte) = src.get(col * height_bytes + v) else {
                return dst;
            };
            if byte == 0 {
                continue;
            }
            for bit in 0..8 {
                if byte & (0x80 >> bit) != 0 {
                    let row = v * 8 + bit;
                    dst[row * width_bytes + col / 8] |= 0x80 >> (col % 8);
                }
            }
        }
    }

    dst
}

/// Row stride in bytes once `width_bytes` is rounded up to `alignment`.
///
/// An alignment of 0 is treated as 1.
#[inline]
pub fn padded_stride(width_bytes: usize, alignment: usize) -> usize {
    width_bytes.next_multiple_of(alignment.max(1))
}

/// Copy a row-major image into a buffer whose rows are `alignment`-byte
/// aligned. Padding bytes and rows missing from a short input are zero
/// (white).
///
/// ## Example
///
/// ```
/// use boleta::render::bitmap::to_padded_raster;
///
/// // 1 byte wide, 2 rows, aligned to 4 bytes
/// let out = to_padded_raster(&[0xAA, 0x55], 1, 2, 4);
/// assert_eq!(out, vec![0xAA, 0, 0, 0, 0x55, 0, 0, 0]);
/// ```
pub fn to_padded_raster(src: &[u8], width_bytes: usize, height: usize, alignment: usize) -> Vec<u8> {
    let stride = padded_stride(width_bytes, alignment);
    let mut dst = vec![0u8; stride * height];

    if width_bytes == 0 {
        return dst;
    }

    for (row, chunk) in src.chunks(width_bytes).take(height).enumerate() {
        let start = row * stride;
        dst[start..start + chunk.len()].copy_from_slice(chunk);
    }

    dst
}
