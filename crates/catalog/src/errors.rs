/// Errors while loading a catalog file.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    ParseError(String),

    #[error("unknown catalog format: {0}")]
    UnknownFormat(String),

    #[error("catalog version {file_version} is newer than supported version {supported_version}")]
    FutureVersion {
        file_version: u32,
        supported_version: u32,
    },

    #[error("duplicate {table} id: {id}")]
    DuplicateId { table: &'static str, id: String },
}
