use std::f64::consts::FRAC_PI_2;

use crate::config::{
    LUMINANCE_BIAS, LUMINANCE_FALLOFF, LUMINANCE_NORMALIZER, LUMINANCE_WEIGHTS, MID_BREAKPOINT,
    UPPER_SPAN,
};
use crate::models::ColorStop;

/// Interpolation between two color stops at one height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blend {
    pub ratio: f64,
    pub upper: ColorStop,
    pub lower: ColorStop,
}

impl Blend {
    pub fn color(&self) -> [f64; 3] {
        let a = self.upper.channels();
        let b = self.lower.channels();
        std::array::from_fn(|i| a[i] * self.ratio + b[i] * (1.0 - self.ratio))
    }
}

/// Pick the color pair and ratio for effective height `y` in an image `height` tall
pub fn blend(y: f64, height: f64, base: ColorStop, mid: ColorStop, top: ColorStop) -> Blend {
    let t = y / height;
    let (ratio, upper, lower) = if t < MID_BREAKPOINT {
        ((FRAC_PI_2 * t / MID_BREAKPOINT).cos(), base, mid)
    } else {
        (
            (FRAC_PI_2 * ((height - y) / height) / UPPER_SPAN).sin(),
            mid,
            top,
        )
    };

    Blend {
        ratio: ratio.clamp(0.0, 1.0),
        upper,
        lower,
    }
}

/// Brightness of a whole column from its three 1D noise samples
pub fn column_luminance(medium: f64, fine: f64, finer: f64) -> f64 {
    let [w0, w1, w2] = LUMINANCE_WEIGHTS;
    255.0 * (LUMINANCE_BIAS + w0 * medium + w1 * fine + w2 * finer) / LUMINANCE_NORMALIZER
}

/// Column brightness dimmed toward the bottom of the ramp, plus sparkle
pub fn local_luminance(t: f64, column_luminance: f64, sparkle: f64) -> f64 {
    let falloff = (FRAC_PI_2 * t / LUMINANCE_FALLOFF).cos();
    (falloff * column_luminance + sparkle).clamp(0.0, 255.0)
}

/// Scale a [0, 1] color by `luminance`, truncating toward zero
pub fn compose(luminance: f64, color: [f64; 3]) -> [u8; 3] {
    color.map(|c| (luminance * c).clamp(0.0, 255.0) as u8)
}
