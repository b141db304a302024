//! BACnet tag/TLV encoding and decoding in pure Rust.
//!
//! `bactlv-core` decodes and encodes the tag-length-value layer of BACnet
//! application data: tag headers, primitive payloads, enumerations with a
//! vendor-proprietary side channel, and constructed data driven by
//! declarative field tables. It is `no_std` + `alloc` compatible.
//!
//! # Feature flags
//!
//! - **`std`** (default) — enables `std::error::Error` implementations.
//! - **`serde`** — derives `Serialize` on decoded values and records.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Bit-addressed reader/writer, tag headers and primitive codecs.
pub mod encoding;
/// Error types for encoding and decoding operations.
pub mod error;
/// Field tables, the generic record codec and the property schema.
pub mod schema;
/// ReadProperty and WriteProperty parameter tables.
pub mod services;
/// BACnet data types: object identifiers, enumerations and primitive values.
pub mod types;

pub use error::{DecodeError, EncodeError};
