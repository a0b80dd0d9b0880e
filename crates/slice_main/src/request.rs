use std::path::{Path, PathBuf};

use slice_fs::SliceFS;

use crate::cli::Cli;
use crate::error::Error;

/// A single validated extraction. Built once per invocation and read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRequest {
    path: PathBuf,
    offset: u64,
    length: u64,
    trim_to_lines: bool,
}

impl ExtractionRequest {
    /// Checks the domain constraints in order: start, size, then the file
    /// itself. Any positive size is accepted; reads stop at end-of-file.
    pub fn validate(cli: &Cli) -> Result<Self, Error> {
        let offset = u64::try_from(cli.start).map_err(|_| Error::NegativeStart(cli.start))?;
        let length = u64::try_from(cli.size)
            .ok()
            .filter(|size| *size > 0)
            .ok_or(Error::NonPositiveSize(cli.size))?;

        SliceFS::ensure_regular_file(&cli.file)?;

        Ok(Self {
            path: cli.file.clone(),
            offset,
            length,
            trim_to_lines: cli.full_lines_only,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn trim_to_lines(&self) -> bool {
        self.trim_to_lines
    }
}
