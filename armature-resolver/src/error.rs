//! Error types for resolver operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving files.
///
/// A file that does not exist is not an error; it is reported through
/// [`LocateResult::is_found`](crate::LocateResult::is_found).
#[derive(Debug, Error)]
pub enum ResolverError {
    /// The start directory does not lie within the root directory
    #[error(
        "Provided start directory is not within root or one of its subdirectories. start={start:?}, root={root:?}"
    )]
    OutsideRoot { start: PathBuf, root: PathBuf },
}

impl ResolverError {
    /// Check if this is a containment failure.
    pub fn is_outside_root(&self) -> bool {
        matches!(self, Self::OutsideRoot { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outside_root_display() {
        let err = ResolverError::OutsideRoot {
            start: PathBuf::from("/other"),
            root: PathBuf::from("/project"),
        };

        assert!(err.is_outside_root());
        let message = err.to_string();
        assert!(message.starts_with(
            "Provided start directory is not within root or one of its subdirectories."
        ));
        assert!(message.contains("/other"));
        assert!(message.contains("/project"));
    }
}
