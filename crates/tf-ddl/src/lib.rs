//! tf-ddl - Statement synthesizer for Tagferry
//!
//! Pure functions from a hydrated entity plus the classification registry
//! to ordered DDL statement strings. Nothing here talks to a network or
//! executes anything; statements are appended to a caller-supplied buffer.

pub mod synth;

pub use synth::synthesize;
