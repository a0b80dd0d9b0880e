use std::path::PathBuf;

use clap::Parser;

/// Extract a slice of bytes from a file.
#[derive(Parser, Debug, Clone)]
#[command(name = "slice", version)]
pub struct Cli {
    /// Byte offset to start reading (0-based)
    #[arg(long, value_name = "OFFSET", allow_negative_numbers = true)]
    pub start: i64,

    /// Number of bytes to read
    #[arg(long, value_name = "BYTES", allow_negative_numbers = true)]
    pub size: i64,

    /// File to extract from
    #[arg(long, value_name = "FILENAME")]
    pub file: PathBuf,

    /// Remove truncated lines at start/end of the slice
    #[arg(long)]
    pub full_lines_only: bool,

    /// Print internal diagnostics to standard error
    #[arg(long)]
    pub debug: bool,
}
