use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProbeError>;

/// Any failure to obtain a metric aborts the whole check; there is no
/// partial verdict and no retry.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("{source_name} unavailable: {reason}")]
    DataUnavailable {
        source_name: &'static str,
        reason: String,
    },
}

impl ProbeError {
    pub fn data_unavailable(source_name: &'static str, reason: impl Into<String>) -> Self {
        Self::DataUnavailable {
            source_name,
            reason: reason.into(),
        }
    }

    /// Name of the data source that failed, for diagnostics.
    pub fn source_name(&self) -> &'static str {
        match self {
            Self::DataUnavailable { source_name, .. } => source_name,
        }
    }
}
