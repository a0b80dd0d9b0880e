use slice_fs::ChunkSize;

const CHUNK_SIZE_VAR: &str = "SLICE_CHUNK_SIZE";

/// Settings resolved from the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// Forces the read chunk size instead of deriving it from the file size.
    pub chunk_size: Option<ChunkSize>,
}

impl Environment {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Resolves settings through `lookup`. Values that do not parse are
    /// ignored.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let chunk_size = lookup(CHUNK_SIZE_VAR).and_then(|raw| {
            let parsed = raw.parse::<usize>().ok().and_then(ChunkSize::new);
            if parsed.is_none() {
                tracing::debug!(value = %raw, max = ChunkSize::MAX, "Ignoring invalid {CHUNK_SIZE_VAR}");
            }
            parsed
        });

        Self { chunk_size }
    }
}
