/// Shade scale generation.
///
/// A scale has ten steps keyed like a UI theme: `50, 100, 200, ... 900`.
/// The base color sits at step 500; lower steps are lighter, higher steps
/// darker. Generation works in HSL via the `palette` crate.
use std::collections::BTreeMap;

use palette::{FromColor, Hsl, Srgb};
use serde::Serialize;

use super::hex::{HexColor, Rgb, to_hex};
use crate::cli::OutputFormat;

/// Scale keys, lightest first.
pub const STEPS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

const BASE_STEP: u16 = 500;

/// Lightness the lightest step approaches.
const LIGHTEST: f32 = 0.97;
/// Lightness the darkest step approaches.
const DARKEST: f32 = 0.12;

/// Maximum hue rotation (degrees) at either end of the scale.
const HUE_SWING: f32 = 8.0;

/// Below this saturation a base is treated as neutral gray.
const NEUTRAL: f32 = 1e-3;

/// A request to a [`ShadeGenerator`].
#[derive(Debug, Clone, Copy)]
pub struct ShadeOptions<'a> {
    /// The validated base color.
    pub color: &'a HexColor,
    /// Vary saturation along the scale.
    pub saturation: bool,
    /// Vary hue along the scale.
    pub hue: bool,
    /// Shape of the returned result.
    pub format: OutputFormat,
}

/// The generated shades in the requested shape.
///
/// Both shapes hold the same colors in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ShadeResult {
    /// Lowercase `#rrggbb` strings, lightest first.
    Array(Vec<String>),
    /// Step → lowercase `#rrggbb`. Serializes in numeric key order.
    Object(BTreeMap<u16, String>),
}

impl ShadeResult {
    /// Colors in scale order regardless of shape.
    #[must_use]
    pub fn colors(&self) -> Vec<&str> {
        match self {
            Self::Array(list) => list.iter().map(String::as_str).collect(),
            Self::Object(map) => map.values().map(String::as_str).collect(),
        }
    }
}

/// Something that can turn a base color into a shade scale.
pub trait ShadeGenerator {
    /// Produce the scale for `opts.color` in `opts.format`.
    fn generate(&self, opts: &ShadeOptions<'_>) -> ShadeResult;
}

/// Default generator: interpolates HSL lightness toward fixed end points,
/// optionally nudging saturation and hue.
///
/// Neutral grays keep a neutral scale; saturation and hue are left alone.
/// A base lighter than 97% (or darker than 12%) has no room on that side, so
/// those steps collapse onto the base: `#ffffff` yields six `#ffffff`
/// entries for steps 50 to 500.
#[derive(Debug, Clone, Copy, Default)]
pub struct HslShadeGenerator;

impl ShadeGenerator for HslShadeGenerator {
    fn generate(&self, opts: &ShadeOptions<'_>) -> ShadeResult {
        let base = opts.color.rgb();
        let hsl = to_hsl(base);

        let scale = STEPS.iter().map(|&step| {
            let hex = if step == BASE_STEP {
                to_hex(base)
            } else {
                to_hex(shade(hsl, step, opts.saturation, opts.hue))
            };
            (step, hex)
        });

        match opts.format {
            OutputFormat::Array => ShadeResult::Array(scale.map(|(_, hex)| hex).collect()),
            OutputFormat::Object => ShadeResult::Object(scale.collect()),
        }
    }
}

/// How far a step moves from the base toward its end point. The magnitude is
/// in `[0, 1]`; the sign is positive for the light side.
fn step_weight(step: u16) -> f32 {
    match step {
        50 => 0.95,
        100 => 0.85,
        200 => 0.65,
        300 => 0.45,
        400 => 0.22,
        600 => -0.22,
        700 => -0.45,
        800 => -0.67,
        900 => -0.88,
        _ => 0.0,
    }
}

fn shade(base: Hsl, step: u16, vary_saturation: bool, vary_hue: bool) -> Rgb {
    let weight = step_weight(step);
    let t = weight.abs();
    let lighter = weight > 0.0;

    let target = if lighter {
        LIGHTEST.max(base.lightness)
    } else {
        DARKEST.min(base.lightness)
    };
    let lightness = base.lightness + (target - base.lightness) * t;

    let neutral = base.saturation < NEUTRAL;

    let mut saturation = base.saturation;
    if vary_saturation && !neutral {
        saturation = if lighter {
            saturation - saturation * 0.2 * t
        } else {
            saturation + (1.0 - saturation) * 0.15 * t
        };
    }

    let mut hue = base.hue.into_degrees();
    if vary_hue && !neutral {
        hue += HUE_SWING * weight;
    }

    from_hsl(Hsl::new(
        hue,
        saturation.clamp(0.0, 1.0),
        lightness.clamp(0.0, 1.0),
    ))
}

fn to_hsl(rgb: Rgb) -> Hsl {
    let srgb: Srgb<f32> = Srgb::new(rgb.r, rgb.g, rgb.b).into_format();
    Hsl::from_color(srgb)
}

fn from_hsl(hsl: Hsl) -> Rgb {
    let srgb: Srgb<f32> = Srgb::from_color(hsl);
    let srgb: Srgb<u8> = srgb.into_format();
    Rgb {
        r: srgb.red,
        g: srgb.green,
        b: srgb.blue,
    }
}
