use std::path::PathBuf;

use thiserror::Error;

/// Lookup failures raised by the problem store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Problem '{query}' not found{}", did_you_mean(.candidates))]
    NotFound {
        query: String,
        candidates: Vec<String>,
    },

    #[error("'{query}' matches several problems{}", did_you_mean(.candidates))]
    AmbiguousMatch {
        query: String,
        candidates: Vec<String>,
    },
}

impl StoreError {
    pub fn candidates(&self) -> &[String] {
        match self {
            StoreError::NotFound { candidates, .. } => candidates,
            StoreError::AmbiguousMatch { candidates, .. } => candidates,
        }
    }
}

fn did_you_mean(candidates: &[String]) -> String {
    if candidates.is_empty() {
        String::new()
    } else {
        format!(". Did you mean: {}?", candidates.join(", "))
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid problems file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to replace problems file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("No problems file at {}. Run `grind init` first.", .0.display())]
    NotInitialized(PathBuf),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, Error>;
