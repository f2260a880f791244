/// Errors returned by [`HashTable`](crate::HashTable) operations and
/// configuration checks.
///
/// Every variant is recoverable: an operation that returns an error leaves
/// the table exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    /// No entry with the requested key exists in the table.
    #[error("key not found")]
    KeyNotFound,
    /// The table was configured with zero buckets.
    #[error("initial capacity must be at least 1, got {capacity}")]
    InvalidCapacity {
        /// The rejected bucket count.
        capacity: usize,
    },
    /// The load factor was not in `(0, 1]`.
    #[error("load factor must be in (0, 1], got {load_factor}")]
    InvalidLoadFactor {
        /// The rejected load factor.
        load_factor: f64,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(Error::KeyNotFound.to_string(), "key not found");
        assert_eq!(
            Error::InvalidCapacity { capacity: 0 }.to_string(),
            "initial capacity must be at least 1, got 0"
        );
        assert_eq!(
            Error::InvalidLoadFactor { load_factor: 1.5 }.to_string(),
            "load factor must be in (0, 1], got 1.5"
        );
    }
}
