/// Error while loading or validating a metadata snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary decode error: {0}")]
    Binary(#[from] postcard::Error),

    #[error("unsupported snapshot format version {found} (expected {expected})")]
    Version { found: u16, expected: u16 },

    #[error("snapshot is neither binary nor UTF-8 JSON")]
    Encoding,

    #[error("{table} row {row}: range {start}..{end} exceeds {target} table length {len}")]
    RangeOutOfBounds {
        table: &'static str,
        row: usize,
        target: &'static str,
        start: u32,
        end: u32,
        len: usize,
    },

    #[error("{table} row {row}: reference {index} exceeds {target} table length {len}")]
    DanglingReference {
        table: &'static str,
        row: usize,
        target: &'static str,
        index: u32,
        len: usize,
    },
}
