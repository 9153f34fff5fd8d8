use std::io;
use std::path::Path;

use clap::Parser;
use colormap_atlas::cli::args::{ColormapAtlasArgs, CommandsEnum, SamplingArgs};
use colormap_atlas::cli::atlas::{run_atlas, DEFAULT_OUTPUT_NAME};
use colormap_atlas::cli::grayscale::run_grayscale;
use colormap_atlas::cli::tables::run_tables;
use colormap_atlas::core::registry::ColormapRegistry;

fn main() {
    let args: ColormapAtlasArgs = ColormapAtlasArgs::parse();

    let registry = ColormapRegistry::builtin();
    let stdout = io::stdout();
    let output_path = Path::new(DEFAULT_OUTPUT_NAME);

    match &args.command {
        Some(CommandsEnum::Atlas(params)) => {
            run_atlas(&registry, params.convention, output_path, &mut stdout.lock()).unwrap();
        }
        Some(CommandsEnum::Grayscale) => {
            run_grayscale(&mut stdout.lock()).unwrap();
        }
        Some(CommandsEnum::Tables(params)) => {
            run_tables(&registry, params.convention, &mut stdout.lock()).unwrap();
        }
        None => {
            // Bare invocation builds the atlas.
            let params = SamplingArgs::default();
            run_atlas(&registry, params.convention, output_path, &mut stdout.lock()).unwrap();
        }
    }
}
