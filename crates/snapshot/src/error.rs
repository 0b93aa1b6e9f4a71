use std::fmt;

#[derive(Debug)]
pub enum SnapshotError {
    /// File could not be read.
    Io(String),
    /// JSON did not deserialize into a snapshot.
    Parse(String),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "cannot read snapshot: {msg}"),
            Self::Parse(msg) => write!(f, "snapshot parse error: {msg}"),
        }
    }
}

impl std::error::Error for SnapshotError {}
