//! Pixel buffer type for the grading pipeline.
//!
//! This module provides [`PixelBuffer`], the owned in-memory image
//! representation passed through the pipeline.
//!
//! # Memory Layout
//!
//! Buffers store three interleaved `f32` channels in **row-major** order,
//! top-to-bottom:
//!
//! ```text
//! Memory: [C0 C1 C2 C0 C1 C2 ...]  <- Row 0
//!         [C0 C1 C2 C0 C1 C2 ...]  <- Row 1
//!         ...
//! ```
//!
//! What the channels mean is carried by the `M: ColorModel` type parameter,
//! so an RGB buffer and an HSV buffer are distinct types.
//!
//! # Normalization
//!
//! All samples are normalized to `[0.0, 1.0]`. The 8-bit `[0, 255]`
//! representation exists only at the codec boundary, via
//! [`PixelBuffer::from_u8`] and [`PixelBuffer::to_u8`] on the RGB tag.
//!
//! # Ownership
//!
//! A buffer is created once by decoding, then passed by exclusive ownership
//! through each pipeline stage. Stages either mutate in place or consume the
//! buffer and produce a replacement; nothing is shared or aliased.
//!
//! # Usage
//!
//! ```rust
//! use tinct_core::{PixelBuffer, Rgb};
//!
//! let mut buf: PixelBuffer<Rgb> = PixelBuffer::new(64, 48);
//! buf.set_pixel(10, 10, [1.0, 0.5, 0.25]);
//! assert_eq!(buf.pixel(10, 10)[0], 1.0);
//! ```

use crate::{ColorModel, Error, Hsv, Result, Rgb};
use std::marker::PhantomData;

/// Number of interleaved channels per pixel.
pub const CHANNELS: usize = 3;

/// Owned pixel buffer tagged with its color model.
///
/// `PixelBuffer<M>` stores `width * height` pixels of three `f32` samples
/// each, normalized to `[0, 1]`. The `M` parameter records whether the
/// samples are RGB or HSV, preventing silent misinterpretation of channel
/// semantics.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer<M: ColorModel> {
    /// Interleaved sample data, `width * height * 3` elements
    data: Vec<f32>,
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Color model marker
    _model: PhantomData<M>,
}

impl<M: ColorModel> PixelBuffer<M> {
    /// Creates a new buffer filled with zeros.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero, or if allocation fails
    /// (extremely large buffers). Use [`PixelBuffer::from_data`] for a
    /// fallible constructor.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tinct_core::{PixelBuffer, Rgb};
    ///
    /// let buf: PixelBuffer<Rgb> = PixelBuffer::new(100, 50);
    /// assert_eq!(buf.width(), 100);
    /// assert_eq!(buf.height(), 50);
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "buffer dimensions must be positive, got {}x{}",
            width,
            height
        );
        let data = vec![0.0; width as usize * height as usize * CHANNELS];
        Self {
            data,
            width,
            height,
            _model: PhantomData,
        }
    }

    /// Creates a buffer from existing sample data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero or
    /// `data.len() != width * height * 3`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tinct_core::{PixelBuffer, Hsv};
    ///
    /// let samples = vec![0.0f32; 8 * 4 * 3];
    /// let buf: PixelBuffer<Hsv> = PixelBuffer::from_data(8, 4, samples).unwrap();
    /// ```
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(
                width,
                height,
                "dimensions must be positive",
            ));
        }
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
            _model: PhantomData,
        })
    }

    /// Creates a buffer filled with a single pixel value.
    pub fn filled(width: u32, height: u32, pixel: [f32; CHANNELS]) -> Result<Self> {
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * CHANNELS);
        for _ in 0..count {
            data.extend_from_slice(&pixel);
        }
        Self::from_data(width, height, data)
    }

    /// Buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` pair.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total pixel count.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the buffer.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [f32; CHANNELS] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for buffer {}x{}",
            x,
            y,
            self.width,
            self.height
        );
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }

    /// Sets the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the buffer.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: [f32; CHANNELS]) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for buffer {}x{}",
            x,
            y,
            self.width,
            self.height
        );
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        self.data[idx..idx + CHANNELS].copy_from_slice(&pixel);
    }

    /// Checked pixel access.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `(x, y)` is outside the buffer.
    pub fn try_pixel(&self, x: u32, y: u32) -> Result<[f32; CHANNELS]> {
        if x >= self.width || y >= self.height {
            return Err(Error::out_of_bounds(x, y, self.width, self.height));
        }
        Ok(self.pixel(x, y))
    }

    /// Iterates over pixels as `&[f32]` slices of length 3, row-major.
    #[inline]
    pub fn pixels(&self) -> impl Iterator<Item = &[f32]> {
        self.data.chunks_exact(CHANNELS)
    }

    /// Iterates over pixels as mutable slices of length 3, row-major.
    #[inline]
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [f32]> {
        self.data.chunks_exact_mut(CHANNELS)
    }

    /// Raw sample slice, interleaved row-major.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Mutable raw sample slice, interleaved row-major.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Decomposes the buffer into `(width, height, data)`.
    ///
    /// Used by conversions that re-tag the samples under a different
    /// color model without copying.
    #[inline]
    pub fn into_parts(self) -> (u32, u32, Vec<f32>) {
        (self.width, self.height, self.data)
    }

    /// Re-tags the samples under a different color model without copying.
    ///
    /// This is the seam used by converters: they rewrite every sample in
    /// the target model's terms and then re-tag the storage. Calling this
    /// without rewriting the samples defeats the tag and misinterprets
    /// channel semantics downstream.
    #[inline]
    pub fn retagged<N: ColorModel>(self) -> PixelBuffer<N> {
        PixelBuffer {
            data: self.data,
            width: self.width,
            height: self.height,
            _model: PhantomData,
        }
    }

    /// Returns `true` if every sample lies in `[0, 1]`.
    ///
    /// Core transforms must uphold this; a violation is a defect, not a
    /// valid output state.
    pub fn is_normalized(&self) -> bool {
        self.data.iter().all(|&v| (0.0..=1.0).contains(&v))
    }
}

impl PixelBuffer<Rgb> {
    /// Builds an RGB buffer from interleaved 8-bit samples.
    ///
    /// Each `[0, 255]` sample is mapped to `[0.0, 1.0]`. This is the decode
    /// side of the codec boundary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the data length does not
    /// match the dimensions.
    pub fn from_u8(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        let samples = data.iter().map(|&v| v as f32 / 255.0).collect();
        Self::from_data(width, height, samples)
    }

    /// Converts the buffer to interleaved 8-bit samples.
    ///
    /// Samples are clamped to `[0, 1]` and rounded to the nearest integer
    /// in `[0, 255]`. This is the encode side of the codec boundary.
    pub fn to_u8(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect()
    }
}

// Hue sits in [0, 1) rather than [0, 1], but a converted buffer never
// stores H = 1.0, so the shared normalization check applies to both tags.
impl PixelBuffer<Hsv> {
    /// Returns the hue channel of the pixel at `(x, y)`.
    #[inline]
    pub fn hue(&self, x: u32, y: u32) -> f32 {
        self.pixel(x, y)[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zeroed() {
        let buf: PixelBuffer<Rgb> = PixelBuffer::new(4, 3);
        assert_eq!(buf.dimensions(), (4, 3));
        assert_eq!(buf.as_slice().len(), 4 * 3 * 3);
        assert!(buf.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_from_data_length_mismatch() {
        let result: Result<PixelBuffer<Rgb>> = PixelBuffer::from_data(4, 4, vec![0.0; 10]);
        assert!(matches!(result, Err(Error::InvalidDimensions { .. })));
    }

    #[test]
    #[should_panic(expected = "dimensions must be positive")]
    fn test_new_zero_dimension_panics() {
        let _: PixelBuffer<Rgb> = PixelBuffer::new(0, 4);
    }

    #[test]
    fn test_from_data_zero_dimension() {
        let result: Result<PixelBuffer<Rgb>> = PixelBuffer::from_data(0, 4, vec![]);
        assert!(matches!(result, Err(Error::InvalidDimensions { .. })));
    }

    #[test]
    fn test_pixel_roundtrip() {
        let mut buf: PixelBuffer<Hsv> = PixelBuffer::new(8, 8);
        buf.set_pixel(3, 5, [0.25, 0.5, 0.75]);
        assert_eq!(buf.pixel(3, 5), [0.25, 0.5, 0.75]);
        // Neighbors untouched
        assert_eq!(buf.pixel(4, 5), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_try_pixel_out_of_bounds() {
        let buf: PixelBuffer<Rgb> = PixelBuffer::new(2, 2);
        assert!(matches!(
            buf.try_pixel(2, 0),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_u8_boundary_roundtrip() {
        let bytes: Vec<u8> = vec![0, 128, 255, 64, 32, 16];
        let buf = PixelBuffer::from_u8(2, 1, &bytes).unwrap();
        assert!(buf.is_normalized());
        approx::assert_relative_eq!(buf.pixel(0, 0)[1], 128.0 / 255.0, epsilon = 1e-6);
        assert_eq!(buf.to_u8(), bytes);
    }

    #[test]
    fn test_to_u8_clamps() {
        let buf: PixelBuffer<Rgb> =
            PixelBuffer::from_data(1, 1, vec![-0.5, 1.5, 0.5]).unwrap();
        assert_eq!(buf.to_u8(), vec![0, 255, 128]);
    }

    #[test]
    fn test_filled() {
        let buf: PixelBuffer<Rgb> = PixelBuffer::filled(2, 2, [1.0, 0.0, 0.0]).unwrap();
        for px in buf.pixels() {
            assert_eq!(px, &[1.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn test_is_normalized_detects_violation() {
        let buf: PixelBuffer<Rgb> =
            PixelBuffer::from_data(1, 1, vec![0.0, 2.0, 0.0]).unwrap();
        assert!(!buf.is_normalized());
    }
}
