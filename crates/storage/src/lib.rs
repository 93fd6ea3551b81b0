//! Storage layer for Lumo
//!
//! This crate provides the key-value store backing persisted UI preferences,
//! including change subscription for cross-instance synchronization.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;

pub use kv::{KvConfig, KvError, KvStore};

// The subscriber returned by `KvStore::watch` is a sled type; re-export the
// crate so consumers can name it without a direct dependency.
pub use sled;
