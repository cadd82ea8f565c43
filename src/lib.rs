//! # AEAD conformance
//! Known-answer conformance harness for AES-GCM implementations.
//!
//! Published test vectors are registered once in a [`registry::Registry`] and a
//! [`runner::Runner`] drives each of them through a pluggable [`provider::AeadProvider`],
//! checking bit-exact ciphertext and tags, successful authentication and the rejection of tampered inputs.
//!
//! # Optional features
//!
//! Every feature enables one adapter provider. Unlike a regular crypto library the adapters are
//! not mutually exclusive, so several backends can be checked against each other in a single build.
//!
//! - **`rust-crypto`** *(enabled by default)*: Uses the [aes-gcm](https://crates.io/crates/aes-gcm) crate
//!   of the RustCrypto project. Supports IV lengths of 8, 12, 16, 60, 64 and 128 bytes.
//! - **`ring`**: Uses the [ring](https://crates.io/crates/ring) library. Only 96 bit IVs are supported.
//! - **`openssl`**: Uses the [rust-openssl](https://crates.io/crates/openssl) crate, which provides bindings to OpenSSL.
//!   Per default the OpenSSL library is locally compiled and then statically linked. The build process requires a C compiler,
//!   `perl` (and `perl-core`), and `make`. Any non-empty IV length is supported.

#![deny(clippy::missing_panics_doc)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
#![warn(
    // missing_docs,
    clippy::doc_markdown,
    clippy::semicolon_if_nothing_returned,
    clippy::single_match_else,
    clippy::inconsistent_struct_constructor,
    clippy::map_unwrap_or,
    clippy::match_same_arms
)]

mod util;

/// AEAD algorithm identifiers and their parameters
pub mod algorithm;
/// error definitions
pub mod error;
pub mod provider;
pub mod registry;
pub mod runner;
pub mod vector;
/// built-in known-answer vectors
pub mod vectors;

pub use algorithm::AeadAlgorithm;
pub use provider::{AeadProvider, DefaultProvider};
pub use registry::Registry;
pub use runner::{Runner, RunnerOptions, TamperCoverage};
pub use vector::TestVector;
