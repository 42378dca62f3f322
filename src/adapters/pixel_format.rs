//! Pixel format conversion helpers for presentation adapters.

/// Drops the alpha channel of RGBA pixel data.
///
/// Trailing bytes that do not form a whole pixel are ignored.
#[must_use]
pub fn rgba_to_rgb(src: &[u8]) -> Vec<u8> {
    let mut dst = Vec::with_capacity(src.len() / 4 * 3);

    for pixel in src.chunks_exact(4) {
        dst.extend_from_slice(&pixel[..3]);
    }

    dst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_to_rgb_known_values() {
        let src = vec![
            255, 0, 0, 255, // red
            0, 255, 0, 255, // green
            0, 0, 255, 255, // blue
            255, 255, 255, 0, // white, transparent
        ];

        assert_eq!(
            rgba_to_rgb(&src),
            vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255]
        );
    }

    #[test]
    fn rgba_to_rgb_empty_buffer() {
        assert!(rgba_to_rgb(&[]).is_empty());
    }

    #[test]
    fn rgba_to_rgb_ignores_partial_pixel() {
        assert_eq!(rgba_to_rgb(&[1, 2, 3, 4, 5, 6]), vec![1, 2, 3]);
    }
}
