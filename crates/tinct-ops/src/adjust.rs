//! Channel adjustment engine for HSV buffers.
//!
//! Applies a [`ColorAdjustment`] pixel-wise:
//!
//! - `H' = frac(H + hue_shift)` - hue is a rotation on a circle, so shifts
//!   wrap modulo 1.0 regardless of sign or magnitude
//! - `S' = wrap(S + saturation_shift)` - saturation shifts wrap modulo 1.0
//!   like hue, except that a sum landing exactly on 1.0 stays at full
//!   saturation instead of collapsing to 0
//! - `V' = clamp(V * lightness_scale, 0, 1)` - brightness has a physical
//!   floor and ceiling, so it scales and clamps rather than wrapping
//!
//! Whether saturation should wrap or clamp is a documented design choice;
//! wraparound keeps it symmetric with hue. See the field docs on
//! [`ColorAdjustment`].
//!
//! # Example
//!
//! ```rust
//! use tinct_core::{Hsv, PixelBuffer};
//! use tinct_ops::adjust::{apply, ColorAdjustment};
//!
//! let buf: PixelBuffer<Hsv> = PixelBuffer::filled(2, 2, [0.9, 0.5, 0.8]).unwrap();
//! let out = apply(buf, &ColorAdjustment::new(0.2, 2.0, 0.0));
//! let px = out.pixel(0, 0);
//! assert!((px[0] - 0.1).abs() < 1e-6); // hue wrapped past 1.0
//! assert_eq!(px[2], 1.0); // value clamped, not wrapped
//! ```

use tinct_core::{Hsv, PixelBuffer, buffer::CHANNELS};
use tracing::trace;

/// Immutable adjustment parameters for one pipeline invocation.
///
/// The default value is the identity transform: zero shifts, unit scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorAdjustment {
    /// Hue rotation as a fraction of a full revolution.
    ///
    /// Any magnitude or sign is accepted; the shift is applied modulo 1.0.
    pub hue_shift: f32,

    /// Multiplicative scale on the value channel.
    ///
    /// Non-negative. No upper bound is enforced, but the scaled value is
    /// clamped to `[0, 1]`, so scales beyond ~3-5 saturate most images to
    /// white. Negative scales clamp every pixel to black.
    pub lightness_scale: f32,

    /// Additive shift on the saturation channel, applied modulo 1.0.
    ///
    /// Wraps like hue rather than clamping, with one difference: 1.0 is a
    /// real endpoint for saturation, so a shifted value landing exactly on
    /// 1.0 stays fully saturated. Only sums past the boundary wrap.
    pub saturation_shift: f32,
}

impl ColorAdjustment {
    /// Creates an adjustment from the three parameters.
    pub fn new(hue_shift: f32, lightness_scale: f32, saturation_shift: f32) -> Self {
        Self {
            hue_shift,
            lightness_scale,
            saturation_shift,
        }
    }

    /// Returns `true` if this adjustment leaves every pixel unchanged.
    pub fn is_identity(&self) -> bool {
        self.hue_shift == 0.0 && self.lightness_scale == 1.0 && self.saturation_shift == 0.0
    }
}

impl Default for ColorAdjustment {
    fn default() -> Self {
        Self {
            hue_shift: 0.0,
            lightness_scale: 1.0,
            saturation_shift: 0.0,
        }
    }
}

/// Fractional part, always in `[0, 1)`.
///
/// `frac(-0.1) = 0.9`, so negative shifts re-enter the circle from above.
#[inline]
fn frac(x: f32) -> f32 {
    x - x.floor()
}

/// Wraps a shifted saturation into `[0, 1]`.
///
/// Unlike hue, where 1.0 and 0.0 name the same point on the circle, full
/// saturation is a distinct state: a sum landing exactly on 1.0 must stay
/// there rather than collapsing to 0. Only sums past the boundary wrap.
#[inline]
fn wrap_saturation(x: f32) -> f32 {
    if x == 1.0 { 1.0 } else { frac(x) }
}

/// Applies an adjustment to every pixel of an HSV buffer.
///
/// Consumes and returns the buffer; the transform happens in place with no
/// allocation. Identity adjustments return the buffer untouched. Pixels are
/// processed in parallel under the `parallel` feature.
pub fn apply(mut buffer: PixelBuffer<Hsv>, adjustment: &ColorAdjustment) -> PixelBuffer<Hsv> {
    if adjustment.is_identity() {
        return buffer;
    }
    trace!(
        width = buffer.width(),
        height = buffer.height(),
        hue_shift = adjustment.hue_shift,
        lightness_scale = adjustment.lightness_scale,
        saturation_shift = adjustment.saturation_shift,
        "adjust::apply"
    );

    let adj = *adjustment;
    let apply_px = move |px: &mut [f32]| {
        px[0] = frac(px[0] + adj.hue_shift);
        px[1] = wrap_saturation(px[1] + adj.saturation_shift);
        px[2] = (px[2] * adj.lightness_scale).clamp(0.0, 1.0);
    };

    let data = buffer.as_mut_slice();
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        data.par_chunks_mut(CHANNELS).for_each(apply_px);
    }
    #[cfg(not(feature = "parallel"))]
    {
        data.chunks_exact_mut(CHANNELS).for_each(apply_px);
    }

    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(h: f32, s: f32, v: f32) -> PixelBuffer<Hsv> {
        PixelBuffer::filled(1, 1, [h, s, v]).unwrap()
    }

    #[test]
    fn test_identity_is_noop() {
        let buf = single(0.3, 0.6, 0.9);
        let before = buf.clone();
        let out = apply(buf, &ColorAdjustment::default());
        assert_eq!(out, before);
    }

    #[test]
    fn test_hue_wraps_forward() {
        let out = apply(single(0.9, 0.0, 0.0), &ColorAdjustment::new(0.2, 1.0, 0.0));
        assert!((out.hue(0, 0) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_hue_wraps_backward() {
        let out = apply(single(0.1, 0.0, 0.0), &ColorAdjustment::new(-0.2, 1.0, 0.0));
        assert!((out.hue(0, 0) - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_large_hue_shift_reduces_modulo_one() {
        let out = apply(single(0.25, 0.0, 0.0), &ColorAdjustment::new(3.5, 1.0, 0.0));
        assert!((out.hue(0, 0) - 0.75).abs() < 1e-5);
    }

    #[test]
    fn test_full_saturation_survives_hue_only_shift() {
        // S = 1.0 plus a zero shift lands exactly on the boundary and must
        // stay fully saturated, not wrap to 0
        let out = apply(single(0.0, 1.0, 1.0), &ColorAdjustment::new(0.5, 1.0, 0.0));
        let px = out.pixel(0, 0);
        assert_eq!(px[1], 1.0);
        assert!((px[0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_saturation_shift_onto_boundary_stays_full() {
        let out = apply(single(0.0, 0.5, 1.0), &ColorAdjustment::new(0.0, 1.0, 0.5));
        assert_eq!(out.pixel(0, 0)[1], 1.0);
    }

    #[test]
    fn test_saturation_wraps_like_hue() {
        let out = apply(single(0.0, 0.8, 0.0), &ColorAdjustment::new(0.0, 1.0, 0.3));
        let px = out.pixel(0, 0);
        assert!((px[1] - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_lightness_clamps_high() {
        let out = apply(single(0.0, 0.0, 0.8), &ColorAdjustment::new(0.0, 2.0, 0.0));
        assert_eq!(out.pixel(0, 0)[2], 1.0);
    }

    #[test]
    fn test_lightness_scales_down() {
        let out = apply(single(0.0, 0.0, 0.8), &ColorAdjustment::new(0.0, 0.5, 0.0));
        assert!((out.pixel(0, 0)[2] - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_negative_lightness_clamps_to_black() {
        let out = apply(single(0.0, 0.0, 0.8), &ColorAdjustment::new(0.0, -1.0, 0.0));
        assert_eq!(out.pixel(0, 0)[2], 0.0);
    }

    #[test]
    fn test_output_stays_normalized() {
        let mut buf = PixelBuffer::<Hsv>::new(4, 4);
        for (i, px) in buf.pixels_mut().enumerate() {
            let t = i as f32 / 15.0;
            px.copy_from_slice(&[t, 1.0 - t, t]);
        }
        let out = apply(buf, &ColorAdjustment::new(0.7, 4.0, -0.4));
        assert!(out.is_normalized());
    }

    #[test]
    fn test_channels_adjust_independently() {
        // Saturation shift must come from the saturation channel, not hue
        let out = apply(single(0.25, 0.5, 1.0), &ColorAdjustment::new(0.0, 1.0, 0.25));
        let px = out.pixel(0, 0);
        assert!((px[0] - 0.25).abs() < 1e-6, "hue untouched");
        assert!((px[1] - 0.75).abs() < 1e-6, "saturation shifted from its own input");
    }
}
