use std::path::PathBuf;

/// Failure to load one of the input data files. Always fatal to initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {what}")]
    Json {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{what} is not a GeoJSON FeatureCollection")]
    NotFeatureCollection { what: String },

    #[error("{what}: feature {index}: {reason}")]
    Geometry { what: String, index: usize, reason: String },

    #[error("{what}: {reason}")]
    Schema { what: String, reason: String },
}

impl LoadError {
    pub(crate) fn json(what: &str, source: serde_json::Error) -> Self {
        LoadError::Json { what: what.to_string(), source }
    }
}

pub(crate) fn read_file(path: &std::path::Path) -> Result<Vec<u8>, LoadError> {
    std::fs::read(path).map_err(|source| LoadError::Read { path: path.to_path_buf(), source })
}
