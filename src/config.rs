use crate::error::Error;
use crate::error::Result;

/// Bucket count used when none is given.
pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

/// Maximum `len / capacity` ratio tolerated before an insert doubles the
/// bucket array.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.7;

/// Construction parameters for a [`HashTable`](crate::HashTable).
///
/// Both values are fixed once the table is built; the bucket count only
/// changes afterwards through resizes triggered by inserts.
///
/// # Examples
///
/// ```rust
/// use chain_hash::TableConfig;
///
/// let config = TableConfig::default()
///     .with_initial_capacity(4)
///     .with_load_factor(0.5);
/// assert!(config.validate().is_ok());
///
/// assert!(TableConfig::default().with_initial_capacity(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    /// Number of buckets allocated up front.
    pub initial_capacity: usize,
    /// Resize threshold, in `(0, 1]`.
    pub load_factor: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

impl TableConfig {
    /// Sets the number of buckets allocated at construction.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets the resize threshold.
    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Checks that the capacity is positive and the load factor lies in
    /// `(0, 1]`.
    ///
    /// NaN is rejected.
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(Error::InvalidCapacity {
                capacity: self.initial_capacity,
            });
        }

        if !(self.load_factor > 0.0 && self.load_factor <= 1.0) {
            return Err(Error::InvalidLoadFactor {
                load_factor: self.load_factor,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = TableConfig::default();
        assert_eq!(config.initial_capacity, 8);
        assert_eq!(config.load_factor, 0.7);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_capacity() {
        let config = TableConfig::default().with_initial_capacity(0);
        assert_eq!(
            config.validate(),
            Err(Error::InvalidCapacity { capacity: 0 })
        );
    }

    #[test]
    fn rejects_out_of_range_load_factors() {
        for load_factor in [0.0, -0.5, 1.01, f64::INFINITY] {
            let config = TableConfig::default().with_load_factor(load_factor);
            assert_eq!(
                config.validate(),
                Err(Error::InvalidLoadFactor { load_factor }),
                "{load_factor}"
            );
        }

        let nan = TableConfig::default().with_load_factor(f64::NAN);
        assert!(matches!(
            nan.validate(),
            Err(Error::InvalidLoadFactor { load_factor }) if load_factor.is_nan()
        ));
    }

    #[test]
    fn accepts_boundary_load_factor() {
        let config = TableConfig::default()
            .with_initial_capacity(1)
            .with_load_factor(1.0);
        assert_eq!(config.validate(), Ok(()));
    }
}
