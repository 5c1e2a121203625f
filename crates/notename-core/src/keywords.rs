//! Keyword expressions and their compilation.
//!
//! A [`KeywordSpec`] is a boolean tree over keyword literals. It compiles to a
//! fragment in which every literal is a whole word, `or` nodes become
//! alternations and `and` nodes become sequences joined by wildcards.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::fragment::PatternFragment;
use crate::slug::{Normalize, SlugKind};

// ---------------------------------------------------------------------------
// Expression tree
// ---------------------------------------------------------------------------

/// A keyword constraint.
///
/// Deserialises from a string (a literal) or a list. A list whose first
/// element is `"or"` or `"and"` is that operator over the remaining elements;
/// any other list is an implicit `and` over all of its elements.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub enum KeywordSpec {
    Literal(String),
    Or(Vec<KeywordSpec>),
    And(Vec<KeywordSpec>),
}

impl KeywordSpec {
    pub fn literal(keyword: impl Into<String>) -> Self {
        KeywordSpec::Literal(keyword.into())
    }

    pub fn or<S: Into<KeywordSpec>>(children: impl IntoIterator<Item = S>) -> Self {
        KeywordSpec::Or(children.into_iter().map(Into::into).collect())
    }

    pub fn and<S: Into<KeywordSpec>>(children: impl IntoIterator<Item = S>) -> Self {
        KeywordSpec::And(children.into_iter().map(Into::into).collect())
    }

    /// Parse the compact text form, e.g. `(or agenda (and project inprogress))`.
    ///
    /// Bare words are literals and double quotes allow spaces or operator
    /// names as literals. A group without a leading `or`/`and`, or several
    /// expressions at the top level, form an implicit `and`.
    pub fn parse(input: &str) -> Result<Self> {
        let tokens = tokenize(input)?;
        let mut parser = Parser { tokens, pos: 0 };
        let mut top = Vec::new();
        while parser.pos < parser.tokens.len() {
            top.push(parser.expr()?);
        }
        match top.len() {
            0 => Err(Error::MalformedKeywords("empty expression".to_string())),
            1 => Ok(top.remove(0)),
            _ => Ok(KeywordSpec::And(top)),
        }
    }

    fn is_literal(&self) -> bool {
        matches!(self, KeywordSpec::Literal(_))
    }
}

impl From<&str> for KeywordSpec {
    fn from(keyword: &str) -> Self {
        KeywordSpec::Literal(keyword.to_string())
    }
}

impl From<String> for KeywordSpec {
    fn from(keyword: String) -> Self {
        KeywordSpec::Literal(keyword)
    }
}

impl From<Vec<&str>> for KeywordSpec {
    fn from(keywords: Vec<&str>) -> Self {
        KeywordSpec::and(keywords)
    }
}

impl<const N: usize> From<[&str; N]> for KeywordSpec {
    fn from(keywords: [&str; N]) -> Self {
        KeywordSpec::and(keywords)
    }
}

impl From<Vec<KeywordSpec>> for KeywordSpec {
    fn from(children: Vec<KeywordSpec>) -> Self {
        KeywordSpec::And(children)
    }
}

impl TryFrom<serde_json::Value> for KeywordSpec {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        use serde_json::Value;

        match value {
            Value::String(s) => Ok(KeywordSpec::Literal(s)),
            Value::Array(items) => {
                let mut items = items.into_iter().peekable();
                let head = match items.peek() {
                    Some(Value::String(s)) if s == "or" || s == "and" => Some(s.clone()),
                    _ => None,
                };
                if head.is_some() {
                    items.next();
                }
                let children = items
                    .map(KeywordSpec::try_from)
                    .collect::<Result<Vec<_>>>()?;
                Ok(match head.as_deref() {
                    Some("or") => KeywordSpec::Or(children),
                    _ => KeywordSpec::And(children),
                })
            }
            other => Err(Error::MalformedKeywords(format!(
                "expected a string or a list, found {other}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Text form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Open,
    Close,
    Word(String),
    Quoted(String),
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();
    while let Some(&c) = chars.peek() {
        match c {
            '(' => {
                chars.next();
                tokens.push(Token::Open);
            }
            ')' => {
                chars.next();
                tokens.push(Token::Close);
            }
            '"' => {
                chars.next();
                let mut text = String::new();
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some(ch) => text.push(ch),
                        None => {
                            return Err(Error::MalformedKeywords(
                                "unterminated quoted keyword".to_string(),
                            ))
                        }
                    }
                }
                tokens.push(Token::Quoted(text));
            }
            c if c.is_whitespace() => {
                chars.next();
            }
            _ => {
                let mut word = String::new();
                while let Some(&ch) = chars.peek() {
                    if ch.is_whitespace() || ch == '(' || ch == ')' || ch == '"' {
                        break;
                    }
                    word.push(ch);
                    chars.next();
                }
                tokens.push(Token::Word(word));
            }
        }
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn expr(&mut self) -> Result<KeywordSpec> {
        match self.next() {
            Some(Token::Word(w)) | Some(Token::Quoted(w)) => Ok(KeywordSpec::Literal(w)),
            Some(Token::Open) => self.group(),
            Some(Token::Close) => Err(Error::MalformedKeywords("unexpected `)`".to_string())),
            None => Err(Error::MalformedKeywords("unexpected end of input".to_string())),
        }
    }

    fn group(&mut self) -> Result<KeywordSpec> {
        let op = match self.tokens.get(self.pos) {
            Some(Token::Word(w)) if w == "or" || w == "and" => {
                let op = w.clone();
                self.pos += 1;
                Some(op)
            }
            _ => None,
        };
        let mut children = Vec::new();
        loop {
            match self.tokens.get(self.pos) {
                Some(Token::Close) => {
                    self.pos += 1;
                    break;
                }
                Some(_) => children.push(self.expr()?),
                None => return Err(Error::MalformedKeywords("missing `)`".to_string())),
            }
        }
        Ok(match op.as_deref() {
            Some("or") => KeywordSpec::Or(children),
            _ => KeywordSpec::And(children),
        })
    }
}

// ---------------------------------------------------------------------------
// Sort policy
// ---------------------------------------------------------------------------

/// Comparator used to put the literals of an `and` node in canonical order.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeywordComparator {
    #[default]
    Lexicographic,
    CaseInsensitive,
    Reverse,
    /// A caller-provided ordering; not available from configuration files.
    #[serde(skip)]
    Custom(fn(&str, &str) -> Ordering),
}

impl KeywordComparator {
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            KeywordComparator::Lexicographic => a.cmp(b),
            KeywordComparator::CaseInsensitive => a.to_lowercase().cmp(&b.to_lowercase()),
            KeywordComparator::Reverse => b.cmp(a),
            KeywordComparator::Custom(f) => f(a, b),
        }
    }
}

/// Whether and how all-literal `and` nodes are reordered before compilation.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordSort {
    pub enabled: bool,
    pub comparator: KeywordComparator,
}

impl KeywordSort {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            comparator: KeywordComparator::default(),
        }
    }

    pub fn by(comparator: KeywordComparator) -> Self {
        Self {
            enabled: true,
            comparator,
        }
    }
}

// ---------------------------------------------------------------------------
// Compilation
// ---------------------------------------------------------------------------

/// Compiles [`KeywordSpec`] trees into pattern fragments.
pub struct KeywordCompiler<'a> {
    normalizer: &'a dyn Normalize,
    sort: KeywordSort,
}

impl<'a> KeywordCompiler<'a> {
    pub fn new(normalizer: &'a dyn Normalize, sort: KeywordSort) -> Self {
        Self { normalizer, sort }
    }

    /// Compile `spec`. Empty `or`/`and` nodes and keywords that normalise
    /// to nothing are rejected.
    pub fn compile(&self, spec: &KeywordSpec) -> Result<PatternFragment> {
        match spec {
            KeywordSpec::Literal(raw) => {
                let keyword = self.normalizer.normalize(SlugKind::Keyword, raw);
                if keyword.is_empty() {
                    return Err(Error::MalformedKeywords(format!(
                        "keyword `{raw}` is empty after normalisation"
                    )));
                }
                Ok(PatternFragment::sequence([
                    PatternFragment::WordStart,
                    PatternFragment::Literal(keyword),
                    PatternFragment::WordEnd,
                ]))
            }
            KeywordSpec::Or(children) => {
                if children.is_empty() {
                    return Err(Error::EmptyKeywordExpression("or"));
                }
                let parts = children
                    .iter()
                    .map(|c| self.compile(c))
                    .collect::<Result<Vec<_>>>()?;
                Ok(PatternFragment::Alternation(parts))
            }
            KeywordSpec::And(children) => {
                if children.is_empty() {
                    return Err(Error::EmptyKeywordExpression("and"));
                }
                let mut ordered: Vec<&KeywordSpec> = children.iter().collect();
                if self.sort.enabled && ordered.iter().all(|c| c.is_literal()) {
                    ordered.sort_by(|a, b| match (a, b) {
                        (KeywordSpec::Literal(a), KeywordSpec::Literal(b)) => {
                            self.sort.comparator.compare(a, b)
                        }
                        _ => Ordering::Equal,
                    });
                    tracing::trace!(count = ordered.len(), "sorted keyword conjunction");
                }
                let parts = ordered
                    .into_iter()
                    .map(|c| self.compile(c))
                    .collect::<Result<Vec<_>>>()?;
                Ok(PatternFragment::separated(parts))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
