//! # Blobcommit Testkit
//!
//! Testing utilities for the blob commitment engine.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known inputs with pinned commitments for cross-implementation verification
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Helper structs for setting up test scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use blobcommit_testkit::vectors::verify_all_vectors;
//!
//! for outcome in verify_all_vectors() {
//!     assert!(outcome.matches, "{}: {}", outcome.name, outcome.commitment);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use blobcommit_testkit::generators::{message_from_params, MessageParams};
//!
//! proptest! {
//!     #[test]
//!     fn message_roundtrips(params: MessageParams) {
//!         let msg = message_from_params(&params);
//!         let bytes = msg.encode().unwrap();
//!         prop_assert_eq!(blobcommit_codec::MsgPayForBlobs::decode(&bytes).unwrap(), msg);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use blobcommit_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let prepared = fixture.queue("https://youtu.be/abc12345678").unwrap();
//! assert_eq!(prepared.blob_size(), prepared.message.blob_sizes[0] as usize);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_namespace_fixtures, TestFixture};
pub use generators::{message_from_params, MessageParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
