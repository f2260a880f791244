#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod chain;

/// Construction parameters and their defaults.
pub mod config;

/// The crate's error type.
pub mod error;

/// The separate-chaining hash table.
///
/// This module provides [`HashTable`], a key-value map that resolves
/// collisions by chaining and doubles its bucket array when the load factor
/// is exceeded.
pub mod hash_table;

/// Hasher builders: the default seeded builder and the deterministic djb2
/// hasher.
pub mod hasher;

pub use config::TableConfig;
pub use error::Error;
pub use error::Result;
pub use hash_table::HashTable;
#[cfg(feature = "stats")]
pub use hash_table::TableStats;
pub use hasher::BuildDjb2;
pub use hasher::DefaultHashBuilder;
pub use hasher::Djb2Hasher;
