//! # Command Layer
//!
//! Pure catalog logic, one module per user-facing command. Every function is
//! generic over [`MovieStorage`](crate::store::MovieStorage), takes regular
//! Rust arguments, and returns regular Rust types. No I/O assumptions:
//! rendering and prompting happen in whichever UI drives this layer.
//!
//! The add/delete/update commands are where "already exists" and "not found"
//! live; the storage layer itself is an unconditional upsert with no-op
//! delete/update, per its contract.

pub mod add;
pub mod delete;
pub mod pick;
pub mod search;
pub mod sorted;
pub mod stats;
pub mod update;
