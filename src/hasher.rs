use core::hash::BuildHasherDefault;
use core::hash::Hasher;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// Hasher builder used when a table is created without an explicit one.
        ///
        /// Backed by `foldhash::fast::RandomState`; each table draws its own
        /// seed, which stays fixed for the table's lifetime.
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// Hasher builder used when a table is created without an explicit one.
        ///
        /// Backed by the standard library's SipHash `RandomState`.
        pub type DefaultHashBuilder = std::collections::hash_map::RandomState;
    } else {
        /// Hasher builder used when a table is created without an explicit one.
        ///
        /// Without `std` or `foldhash` there is no seeded source, so the
        /// deterministic djb2 hasher is used.
        pub type DefaultHashBuilder = BuildDjb2;
    }
}

const DJB2_SEED: u64 = 5381;

/// The djb2 string hash (`h = h * 33 + byte`, seeded with 5381).
///
/// Deterministic across runs and processes, which makes bucket layouts
/// reproducible. It is not resistant to adversarial keys.
///
/// # Examples
///
/// ```rust
/// use core::hash::Hasher;
///
/// use chain_hash::Djb2Hasher;
///
/// let mut hasher = Djb2Hasher::default();
/// hasher.write(b"a");
/// assert_eq!(hasher.finish(), 5381 * 33 + u64::from(b'a'));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Djb2Hasher {
    state: u64,
}

impl Default for Djb2Hasher {
    fn default() -> Self {
        Self { state: DJB2_SEED }
    }
}

impl Hasher for Djb2Hasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state = (self.state << 5)
                .wrapping_add(self.state)
                .wrapping_add(u64::from(byte));
        }
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }
}

/// Builds [`Djb2Hasher`]s.
pub type BuildDjb2 = BuildHasherDefault<Djb2Hasher>;
