//! # savebin
//!
//! A lightweight key-value save-file store with:
//! - A flat binary record format: one `(key, type-tag, payload)` record after
//!   another, no header, no index, no checksum
//! - Read-modify-rewrite mutations keeping one record per key
//! - Fixed-layout typed value codecs for primitive and composite values
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                  Caller                     │
//! │   (encodes values via the value codecs)     │
//! └─────────────────────┬───────────────────────┘
//!                       │ key + tag + payload
//! ┌─────────────────────▼───────────────────────┐
//! │                 SaveStore                   │
//! │    read → decode all → mutate → rewrite     │
//! └──────────┬───────────────────────┬──────────┘
//!            │                       │
//!            ▼                       ▼
//!    ┌──────────────┐        ┌──────────────┐
//!    │ Record Codec │        │ File Access  │
//!    │   (layout)   │        │  (std::fs)   │
//!    └──────────────┘        └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod fs;
pub mod record;
pub mod value;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, SaveError};
pub use config::{Config, FileFormat};
pub use record::{DataType, Record};
pub use store::SaveStore;
pub use value::Value;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of savebin
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
