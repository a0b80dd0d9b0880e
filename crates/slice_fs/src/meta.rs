use std::path::Path;

use crate::error::Error;

impl crate::SliceFS {
    pub fn exists<T: AsRef<Path>>(path: T) -> bool {
        path.as_ref().exists()
    }

    pub fn is_file<T: AsRef<Path>>(path: T) -> bool {
        path.as_ref().is_file()
    }

    /// Fails with [`Error::NotFound`] or [`Error::NotRegularFile`] unless
    /// `path` names an existing regular file (symlinks are followed).
    pub fn ensure_regular_file<T: AsRef<Path>>(path: T) -> Result<(), Error> {
        let path = path.as_ref();
        if !Self::exists(path) {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        if !Self::is_file(path) {
            return Err(Error::NotRegularFile(path.to_path_buf()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;


    use crate::{Error, SliceFS};

    #[test]
    fn test_ensure_regular_file_accepts_file() -> Result<()> {
        let file = tempfile::NamedTempFile::new()?;
        SliceFS::ensure_regular_file(file.path())?;
        Ok(())
    }

    #[test]
    fn test_ensure_regular_file_missing() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let missing = dir.path().join("missing.txt");

        let actual = SliceFS::ensure_regular_file(&missing);

        assert!(matches!(actual, Err(Error::NotFound(path)) if path == missing));
        Ok(())
    }

    #[test]
    fn test_ensure_regular_file_rejects_directory() -> Result<()> {
        let dir = tempfile::tempdir()?;

        let actual = SliceFS::ensure_regular_file(dir.path());

        assert!(matches!(actual, Err(Error::NotRegularFile(_))));
        Ok(())
    }
}
