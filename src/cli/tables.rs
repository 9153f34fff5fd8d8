use std::io::{self, Write};

use crate::core::registry::{ColormapRegistry, NameClass};
use crate::core::sampler::{sample_rgba, SampleConvention};

/// The numeric tables stop one entry short of the atlas resolution.
pub const TABLE_SAMPLE_COUNT: usize = 255;

/**
 * Print a source-style RGB array literal for every normal colormap, in
 * alphabetical order. Reversed maps are skipped; their data is carried by
 * the atlas instead.
 */
pub fn run_tables<W: Write>(
    registry: &ColormapRegistry,
    convention: SampleConvention,
    out: &mut W,
) -> io::Result<()> {
    for (name, map) in registry.iter_class(NameClass::Normal) {
        let samples = sample_rgba(map, TABLE_SAMPLE_COUNT, convention);
        writeln!(out, "{}", format_table(name, &samples))?;
    }
    Ok(())
}

/**
 * Format one colormap as a bracketed list literal:
 *
 * ```text
 * name: [
 *   r, g, b,
 *   r, g, b
 * ]
 * ```
 *
 * Sample lines are joined with the separator up front, so the final line
 * never carries a trailing comma.
 */
pub fn format_table(name: &str, samples: &[[u8; 4]]) -> String {
    let lines: Vec<String> = samples
        .iter()
        .map(|rgba| format!("  {}, {}, {}", rgba[0], rgba[1], rgba[2]))
        .collect();
    format!("{}: [\n{}\n]", name, lines.join(",\n"))
}
