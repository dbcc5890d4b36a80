/// Errors for raw RGB buffers that do not match their stated dimensions.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("invalid RGB image dimensions (width={width}, height={height})")]
    InvalidDimensions { width: usize, height: usize },

    #[error("invalid RGB image buffer length (expected {expected} bytes, got {got})")]
    InvalidBuffer { expected: usize, got: usize },
}

#[derive(Clone, Copy, Debug)]
pub struct RgbImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // row-major RGB, len = w*h*3
}

impl<'a> RgbImageView<'a> {
    /// Wrap a raw buffer, checking that its length matches `width * height * 3`.
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::InvalidDimensions { width, height });
        }
        let Some(expected) = width.checked_mul(height).and_then(|n| n.checked_mul(3)) else {
            return Err(ImageError::InvalidDimensions { width, height });
        };
        if data.len() != expected {
            return Err(ImageError::InvalidBuffer {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_buffer() {
        let data = [0u8; 11];
        let err = RgbImageView::new(2, 2, &data).unwrap_err();
        assert_eq!(
            err,
            ImageError::InvalidBuffer {
                expected: 12,
                got: 11
            }
        );
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert!(matches!(
            RgbImageView::new(0, 4, &[]),
            Err(ImageError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn pixel_reads_row_major_rgb() {
        let mut data = vec![0u8; 2 * 2 * 3];
        data[9..12].copy_from_slice(&[1, 2, 3]);
        let view = RgbImageView::new(2, 2, &data).expect("valid");
        assert_eq!(view.pixel(1, 1), [1, 2, 3]);
        assert_eq!(view.pixel(0, 0), [0, 0, 0]);
    }
}
