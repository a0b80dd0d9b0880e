mod cli;
mod env;
mod error;
mod logging;
mod request;

use std::io::Write;

pub use cli::Cli;
pub use env::Environment;
pub use error::{Error, ErrorKind};
pub use logging::init_tracing;
pub use request::ExtractionRequest;
use slice_fs::SliceFS;
use tracing::debug;

/// Validates `cli` and writes the requested bytes to `out`.
pub fn execute<W: Write>(cli: &Cli, env: &Environment, out: &mut W) -> Result<(), Error> {
    let request = ExtractionRequest::validate(cli)?;
    run(&request, env, out)
}

/// Reads the requested range and writes it, trimmed to whole lines when
/// asked, to `out`. Nothing reaches `out` unless the whole range was read.
pub fn run<W: Write>(
    request: &ExtractionRequest,
    env: &Environment,
    out: &mut W,
) -> Result<(), Error> {
    let bytes = extract(request, env)?;

    let output = if request.trim_to_lines() {
        let trimmed = SliceFS::trim_to_lines(&bytes, request.offset());
        debug!(before = bytes.len(), after = trimmed.len(), "Trimmed to full lines");
        if trimmed.is_empty() && !bytes.is_empty() {
            debug!("Every line in the range was truncated; nothing left after trimming");
        }
        trimmed
    } else {
        bytes.as_slice()
    };

    out.write_all(output)
        .and_then(|()| out.flush())
        .map_err(Error::Write)
}

/// Reads the raw byte range described by `request`, without trimming.
pub fn extract(request: &ExtractionRequest, env: &Environment) -> Result<Vec<u8>, Error> {
    if let Some(chunk) = env.chunk_size {
        debug!(chunk_size = chunk.get(), "Using chunk size from environment");
    }

    SliceFS::read_range(
        request.path(),
        request.offset(),
        request.length(),
        env.chunk_size,
        request.trim_to_lines(),
    )
    .map_err(Error::Read)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use pretty_assertions::assert_eq;
    use slice_fs::ChunkSize;

    use super::*;

    fn create_test_file(content: &[u8]) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), content).unwrap();
        file
    }

    fn cli(start: i64, size: i64, file: &Path, full_lines_only: bool) -> Cli {
        Cli { start, size, file: file.to_path_buf(), full_lines_only, debug: false }
    }

    fn execute_to_vec(cli: &Cli, env: &Environment) -> Result<Vec<u8>, Error> {
        let mut out = Vec::new();
        execute(cli, env, &mut out)?;
        Ok(out)
    }

    #[test]
    fn test_execute_basic_slice() {
        let file = create_test_file(b"Line 1\nLine 2\nLine 3\n");

        let actual = execute_to_vec(&cli(7, 7, file.path(), false), &Environment::default());

        assert_eq!(actual.unwrap(), b"Line 2\n");
    }

    #[test]
    fn test_execute_full_lines_only() {
        let file = create_test_file(b"Line 1\nLine 2\nLine 3\n");

        let actual = execute_to_vec(&cli(3, 12, file.path(), true), &Environment::default());

        assert_eq!(actual.unwrap(), b"Line 2\n");
    }

    #[test]
    fn test_execute_trims_with_requested_offset() {
        // The range is clipped at end-of-file; trimming still sees offset 7.
        let file = create_test_file(b"Line 1\nLine 2\nLine 3\n");

        let actual = execute_to_vec(&cli(7, 100, file.path(), true), &Environment::default());

        assert_eq!(actual.unwrap(), b"Line 3\n");
    }

    #[test]
    fn test_execute_reads_to_eof_with_largest_size() {
        let file = create_test_file(b"abcdefghij");

        let request = cli(5, i64::MAX, file.path(), false);

        let actual = execute_to_vec(&request, &Environment::default());

        assert_eq!(actual.unwrap(), b"fghij");
    }

    #[test]
    fn test_execute_with_chunk_override() {
        let content: Vec<u8> = (0..5_000)
            .map(|i| if i % 80 == 79 { b'\n' } else { b'x' })
            .collect();
        let file = create_test_file(&content);
        let env = Environment { chunk_size: ChunkSize::new(7) };

        let actual = execute_to_vec(&cli(100, 1_000, file.path(), false), &env).unwrap();

        assert_eq!(actual, &content[100..1_100]);
    }

    #[test]
    fn test_execute_is_idempotent() {
        let file = create_test_file(b"alpha\nbeta\ngamma\ndelta\n");
        let request = cli(2, 15, file.path(), true);

        let first = execute_to_vec(&request, &Environment::default()).unwrap();
        let second = execute_to_vec(&request, &Environment::default()).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, b"beta\ngamma\n");
    }

    #[test]
    fn test_execute_writes_nothing_on_validation_error() {
        let file = create_test_file(b"abcdefghij");
        let mut out = Vec::new();

        let error = execute(&cli(0, 0, file.path(), false), &Environment::default(), &mut out)
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Validation);
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_reports_io_error_when_file_vanishes() {
        let file = create_test_file(b"abcdefghij");
        let request = ExtractionRequest::validate(&cli(0, 5, file.path(), false)).unwrap();
        let path = file.path().to_path_buf();
        drop(file);
        let mut out = Vec::new();

        let error = run(&request, &Environment::default(), &mut out).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Io);
        assert!(error.to_string().contains(&path.display().to_string()));
        assert!(out.is_empty());
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_reports_write_failure() {
        let file = create_test_file(b"abcdefghij");
        let request = ExtractionRequest::validate(&cli(0, 5, file.path(), false)).unwrap();

        let error = run(&request, &Environment::default(), &mut FailingWriter).unwrap_err();

        assert!(matches!(error, Error::Write(_)));
        assert_eq!(error.kind(), ErrorKind::Io);
    }
}
