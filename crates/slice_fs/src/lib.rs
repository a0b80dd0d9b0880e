//! File-system layer for the `slice` tool: bounded byte-range reads and
//! line-boundary trimming of the bytes they return.

mod chunk;
mod error;
mod meta;
mod read_range;
mod trim_lines;

pub use chunk::ChunkSize;
pub use error::Error;

/// The byte that ends a line.
pub const LINE_TERMINATOR: u8 = b'\n';

/// Stateless entry point for the file operations. Every handle it opens is
/// dropped before the call that opened it returns.
pub struct SliceFS;
