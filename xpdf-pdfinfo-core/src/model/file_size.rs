use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// File size as reported on the `File size:` line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FileSize {
    /// Size in bytes
    pub bytes: u64,
    /// Line this record was read from
    pub raw: String,
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
