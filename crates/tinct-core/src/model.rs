//! Color model definitions and compile-time channel safety.
//!
//! This module provides the [`ColorModel`] trait and the two marker types
//! the pipeline works in.
//!
//! # Design
//!
//! Color models are represented as zero-sized marker types implementing the
//! [`ColorModel`] trait. This enables compile-time checking of channel
//! semantics without runtime overhead: a conversion or adjustment declares
//! the model it expects in its signature, and a buffer with the wrong tag
//! simply does not type-check. There is no runtime "mode" string to get
//! wrong.
//!
//! # Supported Models
//!
//! - [`Rgb`] - Red/Green/Blue, all three channels bounded `[0, 1]`
//! - [`Hsv`] - Hue/Saturation/Value; hue is a circular coordinate expressed
//!   as a fraction of a full revolution in `[0, 1)`
//!
//! # Usage
//!
//! ```
//! use tinct_core::prelude::*;
//!
//! fn describe<M: ColorModel>(buf: &PixelBuffer<M>) -> String {
//!     format!("{}x{} {}", buf.width(), buf.height(), M::NAME)
//! }
//! ```

use std::fmt;

/// Trait for color model marker types.
///
/// Provides compile-time information about what the three interleaved
/// channels of a [`PixelBuffer`](crate::PixelBuffer) mean.
pub trait ColorModel: Copy + Clone + Default + Send + Sync + fmt::Debug + 'static {
    /// Human-readable name of the color model.
    ///
    /// Used for display and logging.
    const NAME: &'static str;

    /// Channel labels in storage order.
    const CHANNELS: [&'static str; 3];

    /// Whether channel 0 is a circular coordinate.
    ///
    /// Circular channels wrap modulo 1.0 under shifts instead of clamping.
    const CIRCULAR_FIRST_CHANNEL: bool;
}

/// RGB color model.
///
/// Channels are `[R, G, B]`, each bounded to `[0, 1]`. This is the model
/// produced by decoders and consumed by encoders.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb;

impl ColorModel for Rgb {
    const NAME: &'static str = "RGB";
    const CHANNELS: [&'static str; 3] = ["R", "G", "B"];
    const CIRCULAR_FIRST_CHANNEL: bool = false;
}

/// HSV color model.
///
/// Channels are `[H, S, V]`. Hue is a fraction of a full revolution in
/// `[0, 1)` (not degrees); saturation and value are bounded `[0, 1]`
/// coordinates. An achromatic pixel carries `H = 0`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hsv;

impl ColorModel for Hsv {
    const NAME: &'static str = "HSV";
    const CHANNELS: [&'static str; 3] = ["H", "S", "V"];
    const CIRCULAR_FIRST_CHANNEL: bool = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_names() {
        assert_eq!(Rgb::NAME, "RGB");
        assert_eq!(Hsv::NAME, "HSV");
    }

    #[test]
    fn test_channel_labels() {
        assert_eq!(Rgb::CHANNELS, ["R", "G", "B"]);
        assert_eq!(Hsv::CHANNELS, ["H", "S", "V"]);
    }

    #[test]
    fn test_hue_is_circular() {
        assert!(!Rgb::CIRCULAR_FIRST_CHANNEL);
        assert!(Hsv::CIRCULAR_FIRST_CHANNEL);
    }
}
