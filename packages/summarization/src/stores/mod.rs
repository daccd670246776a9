//! Object store implementations.
//!
//! Available backends:
//! - `MemoryStore` - In-memory storage (always available)
//! - `S3Store` - S3-backed storage (requires `aws` feature)

pub mod memory;

#[cfg(feature = "aws")]
pub mod s3;

pub use memory::MemoryStore;

#[cfg(feature = "aws")]
pub use s3::S3Store;
