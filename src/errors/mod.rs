use thiserror::Error;

/// Dataset-level failures. These are fatal: the pipeline produces no output
/// when one of them is raised. Row-level problems are filtered during
/// cleaning and tallied as a diagnostic instead.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file cannot be opened or its contents cannot be read at all.
    #[error("cannot read dataset {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// The header exists but violates the schema contract.
    #[error("dataset is missing required column '{column}'")]
    MissingColumn { column: String },
}
