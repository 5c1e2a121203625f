//! notename — filename patterns for prefix-tagged note files.
//!
//! This crate re-exports [`notename_core`] so that integration tests and
//! benches can import everything from one place.
//!
//! # Architecture
//!
//! ```text
//! FieldInput ──► Assembler ──► Translator ──► PatternFragment ──► Renderer
//!                                 │
//!                                 └──► KeywordCompiler
//! ```
//!
//! Every stage is pure and synchronous; a [`Compiler`] owns the
//! configuration snapshot and the injected collaborators.

pub use notename_core::*;
