//! The public compiler — configuration plus injected collaborators.
//!
//! A [`Compiler`] owns a [`Settings`] snapshot, a [`Normalize`]
//! implementation and a [`Render`] implementation. Its methods take `&self`,
//! so one compiler can be shared freely and every call sees the same
//! configuration from start to finish.

use regex::Regex;

use crate::assemble::assemble;
use crate::config::Settings;
use crate::error::Result;
use crate::fragment::PatternFragment;
use crate::render::{RegexRenderer, Render};
use crate::slug::{Normalize, Slugger};
use crate::translate::TranslateContext;
use crate::types::FieldInput;

/// Compiles [`FieldInput`] into filename patterns.
pub struct Compiler<N = Slugger, R = RegexRenderer> {
    settings: Settings,
    normalizer: N,
    renderer: R,
}

impl Compiler {
    /// A compiler with the default normaliser and renderer.
    pub fn new(settings: Settings) -> Self {
        Self::with_parts(settings, Slugger, RegexRenderer)
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl<N: Normalize, R: Render> Compiler<N, R> {
    pub fn with_parts(settings: Settings, normalizer: N, renderer: R) -> Self {
        Self {
            settings,
            normalizer,
            renderer,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the normaliser.
    pub fn normalizer<M: Normalize>(self, normalizer: M) -> Compiler<M, R> {
        Compiler::with_parts(self.settings, normalizer, self.renderer)
    }

    /// Replace the renderer.
    pub fn renderer<S: Render>(self, renderer: S) -> Compiler<N, S> {
        Compiler::with_parts(self.settings, self.normalizer, renderer)
    }

    /// Assemble the abstract pattern for `input`.
    pub fn compile(&self, input: &FieldInput) -> Result<PatternFragment> {
        let cx = TranslateContext {
            order: &self.settings.order,
            normalizer: &self.normalizer,
            registry: &self.settings.registry,
            sort: self.settings.sort,
        };
        assemble(input, &cx)
    }

    /// Assemble and render the pattern for `input`.
    pub fn compile_to_string(&self, input: &FieldInput) -> Result<String> {
        let fragment = self.compile(input)?;
        let pattern = self.renderer.render(&fragment);
        tracing::debug!(%pattern, "rendered filename pattern");
        Ok(pattern)
    }
}

impl<N: Normalize> Compiler<N, RegexRenderer> {
    /// Assemble, render and compile the pattern for `input`.
    pub fn compile_regex(&self, input: &FieldInput) -> Result<Regex> {
        Ok(Regex::new(&self.compile_to_string(input)?)?)
    }
}

/// Build a pattern from field arguments.
///
/// `note_pattern!(compiler, field = value, ...)` is shorthand for calling
/// [`Compiler::compile`] on a [`FieldInput`] with those fields set; it
/// evaluates to the same `Result<PatternFragment>`. Fields are `identifier`,
/// `signature`, `title`, `keywords` and `file_type`.
///
/// ```
/// use notename_core::{note_pattern, Compiler, KeywordSpec};
///
/// let compiler = Compiler::default();
/// let pattern = note_pattern!(
///     compiler,
///     identifier = "2024",
///     keywords = KeywordSpec::or(["agenda", "inbox"]),
///     file_type = "org",
/// )
/// .unwrap();
/// assert_eq!(pattern.separator_count(), 2);
/// ```
#[macro_export]
macro_rules! note_pattern {
    ($compiler:expr $(, $field:ident = $value:expr)* $(,)?) => {
        $compiler.compile(&$crate::FieldInput::new() $(.$field($value))*)
    };
}
