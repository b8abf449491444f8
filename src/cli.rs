use crate::position::TextIndex;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "rte")]
#[command(version = "0.1.0")]
#[command(about = "Rich text documents: styled text with named tag ranges")]
pub struct CliArgs {
    /// Config file to use instead of the discovered one
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum CliCommand {
    /// List the style tags and how they render
    Catalog,

    /// Print a document's text and tag ranges
    Show { file: PathBuf },

    /// Create a new document (".rte" is appended if missing)
    New {
        file: PathBuf,

        /// Initial text
        #[arg(long, short = 't', default_value_t = String::new())]
        text: String,
    },

    /// Select START..END and toggle TAG on it, then save
    Toggle {
        file: PathBuf,
        tag: String,
        start: TextIndex,
        end: TextIndex,
    },
}

pub fn parse_args() -> Result<CliArgs, clap::Error> {
    CliArgs::try_parse()
}
