//! # Civic Ledger Store
//!
//! Storage abstraction for the Civic Ledger registries.
//!
//! ## Overview
//!
//! Registries keep their records behind the [`RecordStore`] trait, so the
//! permission logic never depends on a concrete map. [`MemoryStore`] is the
//! in-process backend; [`Snapshot`] captures a store's full contents for
//! export, restore, and state commitment.
//!
//! ## Key Types
//!
//! - [`RecordStore`] - The synchronous key-value trait
//! - [`MemoryStore`] - Ordered in-memory backend
//! - [`Snapshot`] - Sorted `(key, record)` list with CBOR encoding
//! - [`StateDigest`] - Blake3 hash of a snapshot's encoding
//!
//! ## Design Notes
//!
//! - **No deletes**: a record, once written, lives as long as the store
//! - **Infallible access**: reads and writes cannot fail; only snapshot
//!   encoding and restore return [`StoreError`]

pub mod error;
pub mod memory;
pub mod snapshot;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use snapshot::{Snapshot, StateDigest};
pub use traits::RecordStore;
