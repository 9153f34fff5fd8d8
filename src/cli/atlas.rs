use std::error::Error;
use std::io::Write;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::core::atlas::assemble_atlas;
use crate::core::registry::{ColormapRegistry, NameClass, REVERSED_SUFFIX};
use crate::core::sampler::{sample_rgba, SampleConvention};

/// File name written into the current working directory by the default path.
pub const DEFAULT_OUTPUT_NAME: &str = "colormaps.png";

/// One sample per 8 bit lookup-table slot.
pub const ATLAS_SAMPLE_COUNT: usize = 256;

/**
 * Render every reversed colormap in the registry into one atlas image.
 *
 * Walks the reversed names in alphabetical order, writing one progress line
 * per map (`<name-without-suffix>: <remaining>`, counting down to 1), then
 * saves the rotated atlas to `output_path`, reads the file back, and writes
 * a blank line followed by the base64 encoding of the PNG bytes. Everything
 * printed goes through `report`, so the whole report can be captured.
 *
 * Any existing file at `output_path` is overwritten.
 */
pub fn run_atlas<W: Write>(
    registry: &ColormapRegistry,
    convention: SampleConvention,
    output_path: &Path,
    report: &mut W,
) -> Result<(), Box<dyn Error>> {
    let entries: Vec<_> = registry.iter_class(NameClass::Reversed).collect();
    assert!(
        !entries.is_empty(),
        "the registry holds no reversed colormaps!"
    );

    let total = entries.len();
    let mut rows = Vec::with_capacity(total);
    for (index, (name, map)) in entries.into_iter().enumerate() {
        let base_name = name.strip_suffix(REVERSED_SUFFIX).unwrap_or(name);
        writeln!(report, "{}: {}", base_name, total - index)?;
        rows.push(sample_rgba(map, ATLAS_SAMPLE_COUNT, convention));
    }

    let atlas = assemble_atlas(&rows);
    atlas.save(output_path)?;

    // The report encodes the bytes that landed on disk, not the in-memory image.
    let png_bytes = std::fs::read(output_path)?;
    writeln!(report)?;
    writeln!(report, "{}", STANDARD.encode(&png_bytes))?;
    Ok(())
}
