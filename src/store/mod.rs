//! Store Module
//!
//! The store mutator: whole-file read-modify-rewrite against record files.
//!
//! ## Responsibilities
//! - Maintain one record per key across all mutations
//! - Create store files lazily on first upsert
//! - Serialize in-process operations per path
//! - Assemble store file paths from the configured base directory
//!
//! ## Mutation Protocol
//! ```text
//! upsert / remove:
//!   read all bytes → decode every record → mutate the list
//!     → encode every record → overwrite the file
//! ```
//!
//! Every operation is O(total file size). There is no index, no partial
//! update, no append-only log; this fits small per-entity save files, not
//! large key spaces.

mod manager;

pub use manager::SaveStore;
