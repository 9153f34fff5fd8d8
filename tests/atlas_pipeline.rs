use std::fs;
use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use colormap_atlas::cli::atlas::{run_atlas, ATLAS_SAMPLE_COUNT};
use colormap_atlas::core::registry::{Colormap, ColormapRegistry};
use colormap_atlas::core::sampler::SampleConvention;

/// Three reversed maps plus one normal map that the atlas must skip.
fn three_map_registry() -> ColormapRegistry {
    let mut registry = ColormapRegistry::new();
    registry.insert("plain", Colormap::from_fn(|t| [t, t, t, 1.0], false));
    registry.insert("x_r", Colormap::from_fn(|t| [t, 0.0, 0.0, 1.0], true));
    registry.insert("y_r", Colormap::from_fn(|t| [0.0, t, 0.0, 1.0], true));
    registry.insert("z_r", Colormap::from_fn(|t| [0.0, 0.0, t, 1.0], true));
    registry
}

fn scratch_path(file_name: &str) -> PathBuf {
    fs::create_dir_all("out").expect("Unable to create 'out' directory");
    PathBuf::from("out").join(file_name)
}

fn run_to_string(registry: &ColormapRegistry, path: &PathBuf) -> String {
    let mut report = Vec::new();
    run_atlas(registry, SampleConvention::LutIndex, path, &mut report)
        .expect("atlas run should succeed");
    String::from_utf8(report).expect("report should be valid UTF-8")
}

#[test]
fn test_progress_lines_count_down_over_reversed_maps() {
    let registry = three_map_registry();
    let path = scratch_path("atlas_progress.png");
    let text = run_to_string(&registry, &path);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "x: 3");
    assert_eq!(lines[1], "y: 2");
    assert_eq!(lines[2], "z: 1");
    assert_eq!(lines[3], "", "base64 payload must be preceded by a blank line");
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_report_base64_round_trips_the_file_bytes() {
    let registry = three_map_registry();
    let path = scratch_path("atlas_round_trip.png");
    let text = run_to_string(&registry, &path);

    let payload = text.lines().last().expect("report should end with base64");
    let decoded = STANDARD.decode(payload).expect("payload should be base64");
    assert_eq!(decoded, fs::read(&path).unwrap());
    assert!(
        decoded.starts_with(&[0x89, b'P', b'N', b'G']),
        "decoded payload should be a PNG"
    );
}

#[test]
fn test_atlas_file_dimensions_and_orientation() {
    let registry = three_map_registry();
    let path = scratch_path("atlas_dimensions.png");
    run_to_string(&registry, &path);

    let atlas = image::open(&path).expect("saved atlas should decode").to_rgba8();
    assert_eq!(atlas.width(), ATLAS_SAMPLE_COUNT as u32);
    assert_eq!(atlas.height(), 3);

    // Rotation puts the alphabetically last map on top; each reversed map
    // starts at its base map's end color.
    assert_eq!(atlas.get_pixel(0, 0).0, [0, 0, 255, 255]); // z_r
    assert_eq!(atlas.get_pixel(0, 2).0, [255, 0, 0, 255]); // x_r
    assert_eq!(atlas.get_pixel(255, 2).0, [0, 0, 0, 255]); // x_r, last sample
}

#[test]
fn test_rerunning_produces_identical_output() {
    let registry = three_map_registry();
    let first_path = scratch_path("atlas_idempotent_first.png");
    let second_path = scratch_path("atlas_idempotent_second.png");

    let first_text = run_to_string(&registry, &first_path);
    let second_text = run_to_string(&registry, &second_path);

    assert_eq!(first_text.lines().last(), second_text.lines().last());
    assert_eq!(fs::read(&first_path).unwrap(), fs::read(&second_path).unwrap());
}

#[test]
fn test_existing_output_file_is_overwritten() {
    let registry = three_map_registry();
    let path = scratch_path("atlas_overwrite.png");
    fs::write(&path, b"stale bytes from an earlier run").unwrap();

    let text = run_to_string(&registry, &path);

    let payload = text.lines().last().unwrap();
    let decoded = STANDARD.decode(payload).unwrap();
    assert_eq!(decoded, fs::read(&path).unwrap());
    assert_ne!(decoded, b"stale bytes from an earlier run");
}
