/// Number of bytes requested from the operating system per read call.
///
/// Chunking is internal to [`crate::SliceFS::read_range`]; callers
/// always receive the full range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSize(usize);

impl ChunkSize {
    pub const BASE: usize = 8 * 1024;
    pub const MAX: usize = 100 * 1024 * 1024;

    /// File size above which the chunk starts to grow.
    const GROWTH_THRESHOLD: u64 = 100 * 1024;

    /// Accepts sizes in `1..=ChunkSize::MAX`.
    pub fn new(bytes: usize) -> Option<Self> {
        (1..=Self::MAX).contains(&bytes).then_some(Self(bytes))
    }

    /// Picks a chunk for a file of `file_size` bytes: doubles the base chunk
    /// once per tenfold step of file size past 100 KiB, and once more when
    /// the bytes will be line-trimmed, never going past [`ChunkSize::MAX`].
    pub fn for_file(file_size: u64, trim_lines: bool) -> Self {
        let mut size = Self::BASE;
        let mut threshold = Self::GROWTH_THRESHOLD;
        while threshold < file_size && size < Self::MAX {
            size *= 2;
            threshold = threshold.saturating_mul(10);
        }

        if trim_lines {
            size *= 2;
        }

        Self(size.min(Self::MAX))
    }

    pub fn get(self) -> usize {
        self.0
    }
}
