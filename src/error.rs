use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for discovery, file parsing and report writing failures.
///
/// Field-level problems (an unparseable date or score) never surface here;
/// they degrade to `None` on the record instead.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("data directory not found: {}", .0.display())]
    MissingRoot(PathBuf),
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

impl AnalysisError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AnalysisError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        AnalysisError::Csv {
            path: path.into(),
            source,
        }
    }

    /// Short, stable name of the failure class, used in per-file diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::MissingRoot(_) => "MissingRoot",
            AnalysisError::Io { .. } => "Io",
            AnalysisError::Csv { .. } => "Csv",
            AnalysisError::Walk(_) => "Walk",
        }
    }

    /// The underlying failure message, without the path prefix that
    /// `Display` adds for file errors.
    pub fn detail(&self) -> String {
        match self {
            AnalysisError::Io { source, .. } => source.to_string(),
            AnalysisError::Csv { source, .. } => source.to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
