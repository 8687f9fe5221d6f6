//! Aspect-preserving image resize.
//!
//! Scales a buffer to a requested target width, deriving the height from
//! the source aspect ratio.
//!
//! # Resampling policy
//!
//! Both filters map each destination pixel center into source space with
//! `center = (dst + 0.5) * scale - 0.5` and clamp sample coordinates to the
//! source edges:
//!
//! - [`Filter::Nearest`] - rounds the mapped center to the closest source
//!   pixel (fastest, blocky)
//! - [`Filter::Bilinear`] - blends the four surrounding source pixels by
//!   fractional distance (default, smooth)
//!
//! The policy is deterministic, so a given input, target width, and filter
//! always produce bit-identical output.
//!
//! # Example
//!
//! ```rust
//! use tinct_core::{PixelBuffer, Rgb};
//! use tinct_ops::resize::{resize, Filter};
//!
//! let src: PixelBuffer<Rgb> = PixelBuffer::new(200, 100);
//! let dst = resize(&src, 100, Filter::Bilinear).unwrap();
//! assert_eq!(dst.dimensions(), (100, 50));
//! ```

use crate::{OpsError, OpsResult};
use tinct_core::{ColorModel, PixelBuffer, buffer::CHANNELS};
use tracing::trace;

/// Resampling filter for resize operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Nearest-neighbor (fastest, no interpolation).
    Nearest,
    /// Bilinear interpolation (smooth, default).
    #[default]
    Bilinear,
}

/// Computes the aspect-preserving height for a target width.
///
/// `target_height = round(target_width * src_h / src_w)`.
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimensions`] if `target_width` is zero or the
/// computed height rounds to zero.
///
/// # Example
///
/// ```rust
/// use tinct_ops::resize::aspect_height;
///
/// assert_eq!(aspect_height(200, 100, 100).unwrap(), 50);
/// ```
pub fn aspect_height(src_w: u32, src_h: u32, target_width: u32) -> OpsResult<u32> {
    if target_width == 0 {
        return Err(OpsError::InvalidDimensions(
            "target width must be positive".into(),
        ));
    }
    let height = (target_width as f64 * src_h as f64 / src_w as f64).round() as u32;
    if height == 0 {
        return Err(OpsError::InvalidDimensions(format!(
            "target width {} collapses {}x{} to zero height",
            target_width, src_w, src_h
        )));
    }
    Ok(height)
}

/// Resizes a buffer to `target_width`, preserving aspect ratio.
///
/// Produces a new buffer; the source is untouched beyond reads. Rows are
/// processed in parallel under the `parallel` feature.
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimensions`] if `target_width` is zero or the
/// derived height is zero.
pub fn resize<M: ColorModel>(
    src: &PixelBuffer<M>,
    target_width: u32,
    filter: Filter,
) -> OpsResult<PixelBuffer<M>> {
    let (src_w, src_h) = src.dimensions();
    let dst_w = target_width;
    let dst_h = aspect_height(src_w, src_h, target_width)?;
    trace!(src_w, src_h, dst_w, dst_h, ?filter, "resize");

    let scale_x = src_w as f32 / dst_w as f32;
    let scale_y = src_h as f32 / dst_h as f32;

    let mut data = vec![0.0f32; dst_w as usize * dst_h as usize * CHANNELS];

    let fill_row = |y: usize, row: &mut [f32]| {
        for x in 0..dst_w as usize {
            let cx = (x as f32 + 0.5) * scale_x - 0.5;
            let cy = (y as f32 + 0.5) * scale_y - 0.5;
            let px = match filter {
                Filter::Nearest => sample_nearest(src, cx, cy),
                Filter::Bilinear => sample_bilinear(src, cx, cy),
            };
            row[x * CHANNELS..(x + 1) * CHANNELS].copy_from_slice(&px);
        }
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        data.par_chunks_mut(dst_w as usize * CHANNELS)
            .enumerate()
            .for_each(|(y, row)| fill_row(y, row));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (y, row) in data.chunks_exact_mut(dst_w as usize * CHANNELS).enumerate() {
            fill_row(y, row);
        }
    }

    PixelBuffer::from_data(dst_w, dst_h, data)
        .map_err(|e| OpsError::InvalidDimensions(e.to_string()))
}

/// Clamps a mapped source coordinate to valid pixel indices.
#[inline]
fn clamp_coord(c: f32, max: u32) -> u32 {
    (c.max(0.0) as u32).min(max - 1)
}

/// Nearest-neighbor sample at a mapped source center.
#[inline]
fn sample_nearest<M: ColorModel>(src: &PixelBuffer<M>, cx: f32, cy: f32) -> [f32; CHANNELS] {
    let x = clamp_coord(cx.round(), src.width());
    let y = clamp_coord(cy.round(), src.height());
    src.pixel(x, y)
}

/// Bilinear sample at a mapped source center, edge-clamped.
#[inline]
fn sample_bilinear<M: ColorModel>(src: &PixelBuffer<M>, cx: f32, cy: f32) -> [f32; CHANNELS] {
    let x0 = clamp_coord(cx.floor(), src.width());
    let y0 = clamp_coord(cy.floor(), src.height());
    let x1 = (x0 + 1).min(src.width() - 1);
    let y1 = (y0 + 1).min(src.height() - 1);

    let fx = (cx - cx.floor()).clamp(0.0, 1.0);
    let fy = (cy - cy.floor()).clamp(0.0, 1.0);

    let p00 = src.pixel(x0, y0);
    let p10 = src.pixel(x1, y0);
    let p01 = src.pixel(x0, y1);
    let p11 = src.pixel(x1, y1);

    let mut out = [0.0f32; CHANNELS];
    for c in 0..CHANNELS {
        let top = p00[c] * (1.0 - fx) + p10[c] * fx;
        let bottom = p01[c] * (1.0 - fx) + p11[c] * fx;
        out[c] = top * (1.0 - fy) + bottom * fy;
    }
    out
}
