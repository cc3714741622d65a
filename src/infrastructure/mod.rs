//! Concrete implementations of the domain ports.

pub mod calendar;
pub mod factory;
pub mod in_memory;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
