use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::{
    domain::table::{PUBLICATION_TITLE, TITLE},
    infrastructure::tabular::FileFormat,
    utils::version,
};

/// Column that fixes the review order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum SortColumn {
    #[default]
    #[serde(rename = "Publication Title")]
    PublicationTitle,
    #[serde(rename = "Title")]
    Title,
}

impl SortColumn {
    pub fn column_name(self) -> &'static str {
        match self {
            SortColumn::PublicationTitle => PUBLICATION_TITLE,
            SortColumn::Title => TITLE,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Spreadsheet to review (csv, tsv, xlsx, xls, ods)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Where to export; defaults to a timestamped file next to the input
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Export format; defaults to the input's format
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<FileFormat>,

    /// Column that sets the review order
    #[arg(long, value_enum, value_name = "COLUMN")]
    pub sort_by: Option<SortColumn>,

    /// Print review progress and exit
    #[arg(long)]
    pub progress: bool,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 1.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 15.0
    )]
    pub frame_rate: f64,
}
