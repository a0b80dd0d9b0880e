use crate::LINE_TERMINATOR;

impl crate::SliceFS {
    /// Narrows `buffer`, read from byte `offset` of its source, to whole
    /// lines.
    ///
    /// A non-zero `offset` always drops the first line, up to and including
    /// its terminator, even when the read happened to start on a line
    /// boundary. A last line without a terminator is then dropped too. A
    /// segment without any terminator is a single truncated line, so it
    /// disappears entirely.
    pub fn trim_to_lines(buffer: &[u8], offset: u64) -> &[u8] {
        let mut lines = buffer;

        if offset > 0 {
            lines = match lines.iter().position(|&b| b == LINE_TERMINATOR) {
                Some(end) => &lines[end + 1..],
                None => &[],
            };
        }

        if lines.last().is_some_and(|&b| b != LINE_TERMINATOR) {
            lines = match lines.iter().rposition(|&b| b == LINE_TERMINATOR) {
                Some(end) => &lines[..=end],
                None => &[],
            };
        }

        lines
    }
}
