use clap::ValueEnum;
use iter_num_tools::lin_space;
use more_asserts::assert_ge;

use crate::core::registry::Colormap;

/**
 * How integer sample positions map into a colormap's domain.
 *
 * Plotting libraries disagree on what an integer argument to a colormap
 * means, so the choice is explicit: `LutIndex` reads the map as an n-entry
 * lookup table, `Raw` feeds the position to the map unscaled.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleConvention {
    /// Position `i` reads entry `i` of an `n`-entry lookup table, i.e. the
    /// map is evaluated at `i / (n - 1)`.
    LutIndex,
    /// Position `i` is fed to the map as-is; every position past the end of
    /// the unit domain saturates at the final color.
    Raw,
}

/// Round a unit-range channel to 8 bits. Ties round to even, so an exact
/// half such as `255 * 0.5 = 127.5` lands on 128.
pub fn quantize_channel(channel: f32) -> u8 {
    (255.0 * channel).round_ties_even().clamp(0.0, 255.0) as u8
}

/// Quantize all four channels of a sampled color.
pub fn quantize_rgba(color: [f32; 4]) -> [u8; 4] {
    [
        quantize_channel(color[0]),
        quantize_channel(color[1]),
        quantize_channel(color[2]),
        quantize_channel(color[3]),
    ]
}

/**
 * Sample a colormap at the integer positions `0..count` under the given
 * convention, quantizing each color to 8 bits per channel.
 */
pub fn sample_rgba(map: &Colormap, count: usize, convention: SampleConvention) -> Vec<[u8; 4]> {
    assert_ge!(count, 2, "`count` must cover both ends of the map!");
    match convention {
        SampleConvention::LutIndex => lin_space(0.0..=1.0f32, count)
            .map(|position| quantize_rgba(map.eval(position)))
            .collect(),
        SampleConvention::Raw => (0..count)
            .map(|position| quantize_rgba(map.eval(position as f32)))
            .collect(),
    }
}
