//! Abstract pattern expressions.
//!
//! A [`PatternFragment`] is the renderer-independent form of a filename
//! pattern. The compiler only ever builds trees out of the operators below;
//! turning a tree into concrete pattern text is the job of a
//! [`Render`](crate::render::Render) implementation.

/// A node of the abstract pattern-matching expression.
///
/// Trees are immutable once built and own all of their children, so every
/// compilation produces an independent value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PatternFragment {
    /// Match the children one after another. The empty sequence matches
    /// anything (it is the identity of concatenation).
    Sequence(Vec<PatternFragment>),
    /// Match any one of the children.
    Alternation(Vec<PatternFragment>),
    /// Match this exact text.
    Literal(String),
    /// Zero or more arbitrary characters.
    AnyRepeat,
    /// Exactly `n` arbitrary characters.
    AnyExactly(usize),
    /// The start of a word.
    WordStart,
    /// The end of a word.
    WordEnd,
    /// The end of the input.
    EndOfInput,
}

impl PatternFragment {
    pub fn literal(text: impl Into<String>) -> Self {
        PatternFragment::Literal(text.into())
    }

    pub fn sequence(parts: impl IntoIterator<Item = PatternFragment>) -> Self {
        PatternFragment::Sequence(parts.into_iter().collect())
    }

    pub fn alternation(parts: impl IntoIterator<Item = PatternFragment>) -> Self {
        PatternFragment::Alternation(parts.into_iter().collect())
    }

    /// The fragment that places no constraint at all.
    pub fn identity() -> Self {
        PatternFragment::Sequence(Vec::new())
    }

    /// `true` if this is the unconstrained identity fragment.
    pub fn is_identity(&self) -> bool {
        matches!(self, PatternFragment::Sequence(parts) if parts.is_empty())
    }

    /// Join `parts` into one sequence with an [`AnyRepeat`] wildcard strictly
    /// between consecutive parts.
    ///
    /// [`AnyRepeat`]: PatternFragment::AnyRepeat
    pub fn separated(parts: impl IntoIterator<Item = PatternFragment>) -> Self {
        let mut out = Vec::new();
        for part in parts {
            if !out.is_empty() {
                out.push(PatternFragment::AnyRepeat);
            }
            out.push(part);
        }
        PatternFragment::Sequence(out)
    }

    /// Number of [`AnyRepeat`](PatternFragment::AnyRepeat) nodes that are
    /// direct children of this node.
    pub fn separator_count(&self) -> usize {
        match self {
            PatternFragment::Sequence(parts) => parts
                .iter()
                .filter(|p| matches!(p, PatternFragment::AnyRepeat))
                .count(),
            _ => 0,
        }
    }
}

impl From<&str> for PatternFragment {
    fn from(text: &str) -> Self {
        PatternFragment::literal(text)
    }
}

impl From<String> for PatternFragment {
    fn from(text: String) -> Self {
        PatternFragment::Literal(text)
    }
}
