//! Per-field translation into pattern fragments.
//!
//! Each filename segment has its own prefix and matching rule:
//!
//! | field       | prefix | rule                                                |
//! |-------------|--------|-----------------------------------------------------|
//! | identifier  | `@@`*  | literal, right-padded to 15 characters              |
//! | signature   | `==`   | normalised text, or a fragment used verbatim        |
//! | title       | `--`   | normalised text, or a fragment used verbatim        |
//! | keywords    | `__`   | wildcard, then the compiled keyword expression      |
//! | file-type   |        | alternation of extensions anchored at end of input  |
//!
//! \* only when the identifier is not the first configured segment.

use crate::error::{Error, Result};
use crate::fragment::PatternFragment;
use crate::identifier::IDENTIFIER_WIDTH;
use crate::keywords::{KeywordCompiler, KeywordSort, KeywordSpec};
use crate::registry::FileTypeRegistry;
use crate::slug::{Normalize, SlugKind};
use crate::types::{Component, ComponentOrder, FieldInput, FieldName, FileTypes};

pub const IDENTIFIER_PREFIX: &str = "@@";
pub const SIGNATURE_PREFIX: &str = "==";
pub const TITLE_PREFIX: &str = "--";
pub const KEYWORDS_PREFIX: &str = "__";

/// Everything a translation reads besides the value itself.
#[derive(Clone, Copy)]
pub struct TranslateContext<'a> {
    pub order: &'a ComponentOrder,
    pub normalizer: &'a dyn Normalize,
    pub registry: &'a FileTypeRegistry,
    pub sort: KeywordSort,
}

/// Translate whichever value `input` holds for `field`.
///
/// Returns `Ok(None)` when the field is absent.
pub fn translate_field(
    field: FieldName,
    input: &FieldInput,
    cx: &TranslateContext<'_>,
) -> Result<Option<PatternFragment>> {
    let fragment = match field {
        FieldName::Identifier => input
            .identifier
            .as_deref()
            .map(|id| identifier(id, cx.order))
            .transpose()?,
        FieldName::Signature => input
            .signature
            .as_ref()
            .map(|c| prefixed_component(SIGNATURE_PREFIX, SlugKind::Signature, c, cx.normalizer)),
        FieldName::Title => input
            .title
            .as_ref()
            .map(|c| prefixed_component(TITLE_PREFIX, SlugKind::Title, c, cx.normalizer)),
        FieldName::Keywords => input
            .keywords
            .as_ref()
            .map(|spec| keywords(spec, cx.normalizer, cx.sort))
            .transpose()?,
        FieldName::FileType => input
            .file_type
            .as_ref()
            .map(|types| file_type(types, cx.registry))
            .transpose()?,
    };
    if fragment.is_some() {
        tracing::trace!(%field, "translated field");
    }
    Ok(fragment)
}

/// Identifier segment: exactly 15 characters, `@@`-prefixed unless it is the
/// first configured segment.
pub fn identifier(value: &str, order: &ComponentOrder) -> Result<PatternFragment> {
    let len = value.chars().count();
    if len > IDENTIFIER_WIDTH {
        return Err(Error::IdentifierTooLong { len });
    }
    let fragment = if len == IDENTIFIER_WIDTH {
        PatternFragment::literal(value)
    } else {
        PatternFragment::sequence([
            PatternFragment::literal(value),
            PatternFragment::AnyExactly(IDENTIFIER_WIDTH - len),
        ])
    };
    if order.is_first(FieldName::Identifier) {
        Ok(fragment)
    } else {
        Ok(PatternFragment::sequence([
            PatternFragment::literal(IDENTIFIER_PREFIX),
            fragment,
        ]))
    }
}

/// Signature or title segment.
pub fn prefixed_component(
    prefix: &str,
    kind: SlugKind,
    value: &Component,
    normalizer: &dyn Normalize,
) -> PatternFragment {
    let body = match value {
        Component::Text(text) => PatternFragment::Literal(normalizer.normalize(kind, text)),
        Component::Pattern(fragment) => fragment.clone(),
    };
    PatternFragment::sequence([PatternFragment::literal(prefix), body])
}

/// Keyword segment.
pub fn keywords(
    spec: &KeywordSpec,
    normalizer: &dyn Normalize,
    sort: KeywordSort,
) -> Result<PatternFragment> {
    let compiled = KeywordCompiler::new(normalizer, sort).compile(spec)?;
    Ok(PatternFragment::sequence([
        PatternFragment::literal(KEYWORDS_PREFIX),
        PatternFragment::AnyRepeat,
        compiled,
    ]))
}

/// File-type segment. Every tag must resolve.
pub fn file_type(types: &FileTypes, registry: &FileTypeRegistry) -> Result<PatternFragment> {
    let extensions = types
        .tags()
        .iter()
        .map(|tag| {
            registry
                .resolve(tag)
                .map(PatternFragment::literal)
                .ok_or_else(|| Error::UnknownFileType(tag.clone()))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(PatternFragment::sequence([
        PatternFragment::Alternation(extensions),
        PatternFragment::EndOfInput,
    ]))
}
