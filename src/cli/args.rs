use clap::{Args, Parser, Subcommand};

use crate::core::sampler::SampleConvention;

#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct ColormapAtlasArgs {
    #[command(subcommand)]
    pub command: Option<CommandsEnum>,
}

#[derive(Debug, Subcommand)]
pub enum CommandsEnum {
    /// Render every reversed colormap into one PNG atlas and print it as base64.
    Atlas(SamplingArgs),
    /// Print the 256-entry grayscale identity table.
    Grayscale,
    /// Print a source-style RGB array literal for every normal colormap.
    Tables(SamplingArgs),
}

#[derive(Debug, Args)]
pub struct SamplingArgs {
    /// How integer sample positions map into the colormap domain.
    #[clap(long, value_enum, default_value = "lut-index")]
    pub convention: SampleConvention,
}

impl Default for SamplingArgs {
    fn default() -> Self {
        SamplingArgs {
            convention: SampleConvention::LutIndex,
        }
    }
}
