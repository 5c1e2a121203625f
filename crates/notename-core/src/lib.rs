//! notename-core — compile partial note metadata into filename patterns.
//!
//! Note filenames carry their metadata as prefix-tagged segments:
//!
//! ```text
//! 20240115T090500==1a--weekly-review__work_review.org
//! └─identifier──┘└sig┘└──title───────┘└keywords───┘└ext
//! ```
//!
//! Callers describe the notes they are after with a [`FieldInput`] (any
//! subset of identifier, signature, title, keywords and file type) and get
//! back a pattern that matches exactly the filenames consistent with it.
//!
//! # Architecture
//!
//! ```text
//! FieldInput ──► assemble ──► translate (per field) ──► PatternFragment ──► Render
//!                                 │
//!                                 └──► KeywordCompiler (keywords field)
//! ```
//!
//! Normalisation, file-type resolution and rendering are injected
//! collaborators; [`Slugger`], [`FileTypeRegistry`] and [`RegexRenderer`]
//! are the defaults.

pub mod assemble;
pub mod compiler;
pub mod config;
pub mod error;
pub mod fragment;
pub mod identifier;
pub mod keywords;
pub mod registry;
pub mod render;
pub mod slug;
pub mod translate;
pub mod types;

pub use compiler::Compiler;
pub use config::{Config, Settings};
pub use error::{Error, Result};
pub use fragment::PatternFragment;
pub use keywords::{KeywordComparator, KeywordSort, KeywordSpec};
pub use registry::FileTypeRegistry;
pub use render::{RegexRenderer, Render};
pub use slug::{Normalize, SlugKind, Slugger};
pub use types::{Arg, Component, ComponentOrder, FieldInput, FieldName, FileTypes};
