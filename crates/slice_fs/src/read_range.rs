use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

use anyhow::{Context, Result};

use crate::chunk::ChunkSize;

impl crate::SliceFS {
    /// Reads up to `length` bytes of `path` starting at byte `offset`.
    ///
    /// The returned buffer is shorter than `length` only when end-of-file is
    /// reached first, and empty when `offset` is at or past end-of-file.
    /// Reads are issued in `chunk`-sized pieces; without one, the chunk is
    /// picked from the open file's size and `trim_lines`.
    pub fn read_range<T: AsRef<Path>>(
        path: T,
        offset: u64,
        length: u64,
        chunk: Option<ChunkSize>,
        trim_lines: bool,
    ) -> Result<Vec<u8>> {
        let path = path.as_ref();
        let mut file = File::open(path)
            .with_context(|| format!("Failed to open file {}", path.display()))?;
        let file_size = file
            .metadata()
            .with_context(|| format!("Failed to read metadata of {}", path.display()))?
            .len();
        let chunk = chunk.unwrap_or_else(|| ChunkSize::for_file(file_size, trim_lines));

        tracing::debug!(
            path = %path.display(),
            file_size,
            offset,
            length,
            chunk_size = chunk.get(),
            "Reading byte range"
        );

        file.seek(SeekFrom::Start(offset))
            .with_context(|| format!("Failed to seek to byte {offset} in {}", path.display()))?;

        // Sized from the file, not the request, so an oversized length does
        // not allocate past what can be read.
        let expected = file_size.saturating_sub(offset).min(length);
        let mut buffer = Vec::with_capacity(
            usize::try_from(expected).context("Requested range does not fit in memory")?,
        );

        let mut remaining = length;
        while remaining > 0 {
            let want = usize::try_from(remaining).map_or(chunk.get(), |r| r.min(chunk.get()));
            let filled = buffer.len();
            buffer.resize(filled + want, 0);

            match file.read(&mut buffer[filled..]) {
                Ok(0) => {
                    buffer.truncate(filled);
                    break;
                }
                Ok(n) => {
                    buffer.truncate(filled + n);
                    remaining -= n as u64;
                }
                Err(error) if error.kind() == ErrorKind::Interrupted => buffer.truncate(filled),
                Err(error) => {
                    return Err(error).with_context(|| {
                        format!("Failed to read from byte {offset} of {}", path.display())
                    });
                }
            }
        }

        tracing::debug!(bytes_read = buffer.len(), "Read byte range");
        Ok(buffer)
    }
}
