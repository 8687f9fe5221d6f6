//! Bidirectional RGB <-> HSV conversion.
//!
//! Pixel-wise, pure, and total: every input in `[0, 1]^3` has a defined
//! output. Hue is expressed as a fraction of a full revolution in `[0, 1)`
//! rather than degrees, so wraparound arithmetic downstream is a plain
//! `frac`.
//!
//! # Conventions
//!
//! - `V = max(R, G, B)`
//! - `S = 0` when `V = 0`, else `(V - min) / V`
//! - `H` from the conventional 6-way case split on the maximum channel,
//!   `0` for achromatic pixels
//!
//! The round trip `to_rgb(to_hsv(x))` reproduces `x` within floating-point
//! rounding (well under 1/255 per channel).
//!
//! # Example
//!
//! ```rust
//! use tinct_ops::convert::{hsv_to_rgb, rgb_to_hsv};
//!
//! let [h, s, v] = rgb_to_hsv([1.0, 0.0, 0.0]);
//! assert_eq!([h, s, v], [0.0, 1.0, 1.0]); // pure red
//! let rgb = hsv_to_rgb([0.5, 1.0, 1.0]);
//! assert!((rgb[1] - 1.0).abs() < 1e-6); // cyan
//! ```

use tinct_core::{Hsv, PixelBuffer, Rgb, buffer::CHANNELS};
use tracing::trace;

/// Converts one RGB pixel to HSV.
///
/// Input channels are expected in `[0, 1]`; the result has `H` in `[0, 1)`
/// and `S`, `V` in `[0, 1]`.
#[inline]
pub fn rgb_to_hsv([r, g, b]: [f32; 3]) -> [f32; 3] {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta <= 0.0 {
        // Achromatic: hue is undefined, pinned to 0
        0.0
    } else if max == r {
        // rem_euclid keeps the sector in [0, 6) when g < b
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        (((b - r) / delta) + 2.0) / 6.0
    } else {
        (((r - g) / delta) + 4.0) / 6.0
    };

    let s = if max <= 0.0 { 0.0 } else { delta / max };

    [h, s, max]
}

/// Converts one HSV pixel to RGB.
///
/// Standard sector-based reconstruction. Defined for every input in
/// `[0, 1]^3`; `H = 1.0` lands in the last sector and reproduces red.
#[inline]
pub fn hsv_to_rgb([h, s, v]: [f32; 3]) -> [f32; 3] {
    let h6 = h * 6.0;
    let c = v * s;
    let x = c * (1.0 - ((h6 % 2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h6 < 1.0 {
        (c, x, 0.0)
    } else if h6 < 2.0 {
        (x, c, 0.0)
    } else if h6 < 3.0 {
        (0.0, c, x)
    } else if h6 < 4.0 {
        (0.0, x, c)
    } else if h6 < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    [r + m, g + m, b + m]
}

/// Converts an owned RGB buffer to HSV in place.
///
/// Consumes the buffer and re-tags the storage; no allocation. Pixels are
/// processed in parallel under the `parallel` feature.
pub fn to_hsv(buffer: PixelBuffer<Rgb>) -> PixelBuffer<Hsv> {
    trace!(
        width = buffer.width(),
        height = buffer.height(),
        "convert::to_hsv"
    );
    let mut buffer: PixelBuffer<Hsv> = buffer.retagged();
    convert_pixels(buffer.as_mut_slice(), |px| rgb_to_hsv(px));
    buffer
}

/// Converts an owned HSV buffer back to RGB in place.
///
/// Exact inverse of [`to_hsv`] up to floating-point rounding.
pub fn to_rgb(buffer: PixelBuffer<Hsv>) -> PixelBuffer<Rgb> {
    trace!(
        width = buffer.width(),
        height = buffer.height(),
        "convert::to_rgb"
    );
    let mut buffer: PixelBuffer<Rgb> = buffer.retagged();
    convert_pixels(buffer.as_mut_slice(), |px| hsv_to_rgb(px));
    buffer
}

/// Applies a pixel conversion across the whole sample slice.
fn convert_pixels(data: &mut [f32], f: impl Fn([f32; 3]) -> [f32; 3] + Send + Sync) {
    let apply = |px: &mut [f32]| {
        let out = f([px[0], px[1], px[2]]);
        px.copy_from_slice(&out);
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        data.par_chunks_mut(CHANNELS).for_each(apply);
    }
    #[cfg(not(feature = "parallel"))]
    {
        data.chunks_exact_mut(CHANNELS).for_each(apply);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f32 = 1.0 / 255.0;

    fn assert_pixel_close(got: [f32; 3], want: [f32; 3]) {
        for (g, w) in got.iter().zip(want) {
            assert!(
                (g - w).abs() <= TOL,
                "expected {:?}, got {:?}",
                want,
                got
            );
        }
    }

    #[test]
    fn test_primaries() {
        assert_pixel_close(rgb_to_hsv([1.0, 0.0, 0.0]), [0.0, 1.0, 1.0]);
        assert_pixel_close(rgb_to_hsv([0.0, 1.0, 0.0]), [1.0 / 3.0, 1.0, 1.0]);
        assert_pixel_close(rgb_to_hsv([0.0, 0.0, 1.0]), [2.0 / 3.0, 1.0, 1.0]);
    }

    #[test]
    fn test_secondaries() {
        // Cyan sits opposite red on the hue circle
        assert_pixel_close(rgb_to_hsv([0.0, 1.0, 1.0]), [0.5, 1.0, 1.0]);
        assert_pixel_close(rgb_to_hsv([1.0, 1.0, 0.0]), [1.0 / 6.0, 1.0, 1.0]);
        assert_pixel_close(rgb_to_hsv([1.0, 0.0, 1.0]), [5.0 / 6.0, 1.0, 1.0]);
    }

    #[test]
    fn test_achromatic() {
        assert_pixel_close(rgb_to_hsv([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_pixel_close(rgb_to_hsv([1.0, 1.0, 1.0]), [0.0, 0.0, 1.0]);
        assert_pixel_close(rgb_to_hsv([0.5, 0.5, 0.5]), [0.0, 0.0, 0.5]);
    }

    #[test]
    fn test_hue_stays_in_unit_interval() {
        // Red max with g < b drives the raw sector negative; rem_euclid
        // must bring it back into [0, 6)
        let [h, _, _] = rgb_to_hsv([1.0, 0.0, 0.5]);
        assert!((0.0..1.0).contains(&h), "h = {}", h);
        assert_relative_eq!(h, 11.0 / 12.0, epsilon = 1e-6);
    }

    #[test]
    fn test_hsv_to_rgb_full_hue_is_red() {
        assert_pixel_close(hsv_to_rgb([1.0, 1.0, 1.0]), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_round_trip_grid() {
        // Coarse sweep of the RGB cube
        for r in 0..=4 {
            for g in 0..=4 {
                for b in 0..=4 {
                    let rgb = [r as f32 / 4.0, g as f32 / 4.0, b as f32 / 4.0];
                    let back = hsv_to_rgb(rgb_to_hsv(rgb));
                    assert_pixel_close(back, rgb);
                }
            }
        }
    }

    #[test]
    fn test_buffer_conversion_round_trip() {
        let mut src = PixelBuffer::<Rgb>::new(4, 2);
        src.set_pixel(0, 0, [1.0, 0.0, 0.0]);
        src.set_pixel(1, 0, [0.2, 0.7, 0.4]);
        src.set_pixel(2, 1, [0.9, 0.9, 0.1]);

        let expected = src.clone();
        let back = to_rgb(to_hsv(src));

        for (got, want) in back.pixels().zip(expected.pixels()) {
            for (g, w) in got.iter().zip(want) {
                assert!((g - w).abs() <= TOL);
            }
        }
    }

    #[test]
    fn test_buffer_conversion_preserves_dimensions() {
        let src = PixelBuffer::<Rgb>::new(7, 3);
        let hsv = to_hsv(src);
        assert_eq!(hsv.dimensions(), (7, 3));
        assert!(hsv.is_normalized());
    }
}
