//! Core types for notename-core.
//!
//! This module defines the vocabulary shared by every compilation stage: the
//! closed set of [`FieldName`]s, the configured [`ComponentOrder`], and the
//! caller-supplied [`FieldInput`] together with the per-field value shapes.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::fragment::PatternFragment;
use crate::keywords::KeywordSpec;

// ---------------------------------------------------------------------------
// Field names
// ---------------------------------------------------------------------------

/// A filename metadata field the compiler knows how to translate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldName {
    Identifier,
    Signature,
    Title,
    Keywords,
    FileType,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::Identifier,
        FieldName::Signature,
        FieldName::Title,
        FieldName::Keywords,
        FieldName::FileType,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Identifier => "identifier",
            FieldName::Signature => "signature",
            FieldName::Title => "title",
            FieldName::Keywords => "keywords",
            FieldName::FileType => "file-type",
        }
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = Error;

    /// Accepts the kebab-case name with an optional leading `:`.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.strip_prefix(':').unwrap_or(s);
        FieldName::ALL
            .into_iter()
            .find(|f| f.as_str() == name)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Component order
// ---------------------------------------------------------------------------

/// The configured order of filename segments.
///
/// `file-type` never appears here: it is always the last segment, so it is
/// dropped on construction and re-appended by [`visit_order`].
///
/// [`visit_order`]: ComponentOrder::visit_order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentOrder(Vec<FieldName>);

impl ComponentOrder {
    /// Build an order, rejecting fields listed twice.
    pub fn new(fields: impl IntoIterator<Item = FieldName>) -> Result<Self> {
        let mut out: Vec<FieldName> = Vec::new();
        for field in fields {
            if field == FieldName::FileType {
                continue;
            }
            if out.contains(&field) {
                return Err(Error::DuplicateComponent(field));
            }
            out.push(field);
        }
        Ok(Self(out))
    }

    pub fn fields(&self) -> &[FieldName] {
        &self.0
    }

    /// `true` if `field` is the first configured segment.
    pub fn is_first(&self, field: FieldName) -> bool {
        self.0.first() == Some(&field)
    }

    /// The configured fields followed by `file-type`.
    pub fn visit_order(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0
            .iter()
            .copied()
            .chain(std::iter::once(FieldName::FileType))
    }
}

impl Default for ComponentOrder {
    fn default() -> Self {
        Self(vec![
            FieldName::Identifier,
            FieldName::Signature,
            FieldName::Title,
            FieldName::Keywords,
        ])
    }
}

// ---------------------------------------------------------------------------
// Field values
// ---------------------------------------------------------------------------

/// Value of a `signature` or `title` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    /// Free text, normalised before it is matched.
    Text(String),
    /// A ready-made fragment, used verbatim.
    Pattern(PatternFragment),
}

impl From<&str> for Component {
    fn from(text: &str) -> Self {
        Component::Text(text.to_string())
    }
}

impl From<String> for Component {
    fn from(text: String) -> Self {
        Component::Text(text)
    }
}

impl From<PatternFragment> for Component {
    fn from(fragment: PatternFragment) -> Self {
        Component::Pattern(fragment)
    }
}

/// One or more symbolic file-type tags. A bare tag is a singleton list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTypes(pub Vec<String>);

impl FileTypes {
    pub fn tags(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for FileTypes {
    fn from(tag: &str) -> Self {
        FileTypes(vec![tag.to_string()])
    }
}

impl From<String> for FileTypes {
    fn from(tag: String) -> Self {
        FileTypes(vec![tag])
    }
}

impl From<Vec<String>> for FileTypes {
    fn from(tags: Vec<String>) -> Self {
        FileTypes(tags)
    }
}

impl From<Vec<&str>> for FileTypes {
    fn from(tags: Vec<&str>) -> Self {
        FileTypes(tags.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FileTypes {
    fn from(tags: [&str; N]) -> Self {
        FileTypes(tags.iter().map(|t| t.to_string()).collect())
    }
}

// ---------------------------------------------------------------------------
// Field input
// ---------------------------------------------------------------------------

/// The fields a caller wants to constrain. Absent fields are unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldInput {
    pub identifier: Option<String>,
    pub signature: Option<Component>,
    pub title: Option<Component>,
    pub keywords: Option<KeywordSpec>,
    pub file_type: Option<FileTypes>,
}

impl FieldInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Constrain the identifier to notes created on `date`.
    pub fn identifier_date(self, date: chrono::NaiveDate) -> Self {
        self.identifier(crate::identifier::date_prefix(date))
    }

    pub fn signature(mut self, signature: impl Into<Component>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    pub fn title(mut self, title: impl Into<Component>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn keywords(mut self, keywords: impl Into<KeywordSpec>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub fn file_type(mut self, file_type: impl Into<FileTypes>) -> Self {
        self.file_type = Some(file_type.into());
        self
    }

    /// `true` if the caller supplied a value for `field`.
    pub fn is_present(&self, field: FieldName) -> bool {
        match field {
            FieldName::Identifier => self.identifier.is_some(),
            FieldName::Signature => self.signature.is_some(),
            FieldName::Title => self.title.is_some(),
            FieldName::Keywords => self.keywords.is_some(),
            FieldName::FileType => self.file_type.is_some(),
        }
    }

    /// `true` if no field is constrained.
    pub fn is_empty(&self) -> bool {
        !FieldName::ALL.into_iter().any(|f| self.is_present(f))
    }

    /// Build input from a flat `key, value, key, value, …` argument list.
    ///
    /// An odd-length list is rejected before anything else is looked at.
    /// Unknown keys (including `directory`) are skipped with a warning. When
    /// a key repeats, the first occurrence wins.
    pub fn from_args(args: impl IntoIterator<Item = Arg>) -> Result<Self> {
        let args: Vec<Arg> = args.into_iter().collect();
        if args.len() % 2 != 0 {
            return Err(Error::MalformedCall { len: args.len() });
        }

        let mut input = FieldInput::new();
        let mut pairs = args.into_iter().enumerate();
        while let (Some((position, key)), Some((_, value))) = (pairs.next(), pairs.next()) {
            let Arg::Key(key) = key else {
                return Err(Error::ExpectedField { position });
            };
            let field = match key.parse::<FieldName>() {
                Ok(field) => field,
                Err(_) => {
                    tracing::warn!(field = %key, "ignoring unknown field");
                    continue;
                }
            };
            if input.is_present(field) {
                tracing::debug!(%field, "ignoring repeated field");
                continue;
            }
            input.set(field, value)?;
        }
        Ok(input)
    }

    fn set(&mut self, field: FieldName, value: Arg) -> Result<()> {
        match (field, value) {
            (FieldName::Identifier, Arg::Text(text)) => self.identifier = Some(text),
            (FieldName::Signature, Arg::Text(text)) => self.signature = Some(Component::Text(text)),
            (FieldName::Signature, Arg::Pattern(p)) => self.signature = Some(Component::Pattern(p)),
            (FieldName::Title, Arg::Text(text)) => self.title = Some(Component::Text(text)),
            (FieldName::Title, Arg::Pattern(p)) => self.title = Some(Component::Pattern(p)),
            (FieldName::Keywords, Arg::Text(text)) => self.keywords = Some(KeywordSpec::Literal(text)),
            (FieldName::Keywords, Arg::Keywords(spec)) => self.keywords = Some(spec),
            (FieldName::FileType, Arg::Text(tag)) => self.file_type = Some(FileTypes(vec![tag])),
            (FieldName::FileType, Arg::Tags(tags)) => self.file_type = Some(FileTypes(tags)),
            (field, _) => {
                return Err(Error::InvalidValue {
                    field,
                    expected: expected_shape(field),
                })
            }
        }
        Ok(())
    }
}

fn expected_shape(field: FieldName) -> &'static str {
    match field {
        FieldName::Identifier => "a string",
        FieldName::Signature | FieldName::Title => "a string or a pattern",
        FieldName::Keywords => "a string or a keyword expression",
        FieldName::FileType => "a file-type tag or a list of tags",
    }
}

/// One element of a dynamic argument list for [`FieldInput::from_args`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// A field name, with or without a leading `:`.
    Key(String),
    Text(String),
    Pattern(PatternFragment),
    Keywords(KeywordSpec),
    Tags(Vec<String>),
}

impl Arg {
    pub fn key(name: impl Into<String>) -> Self {
        Arg::Key(name.into())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Arg::Text(text.into())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
