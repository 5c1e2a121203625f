//! Test builders — ergonomic constructors for compilers and note filenames.
//!
//! These are designed for readability in test assertions, not for production
//! use. They panic on invalid input rather than returning `Result`.

use notename::{
    Compiler, ComponentOrder, FieldName, KeywordComparator, KeywordSort, Settings,
};

// ---------------------------------------------------------------------------
// Compilers
// ---------------------------------------------------------------------------

/// Compiler with default settings and collaborators.
pub fn compiler() -> Compiler {
    Compiler::default()
}

/// Compiler with a custom component order.
pub fn compiler_with_order(order: &[FieldName]) -> Compiler {
    Compiler::new(Settings {
        order: ComponentOrder::new(order.iter().copied()).expect("valid component order"),
        ..Settings::default()
    })
}

/// Compiler that keeps keyword conjunctions in input order.
pub fn unsorted_compiler() -> Compiler {
    Compiler::new(Settings {
        sort: KeywordSort::disabled(),
        ..Settings::default()
    })
}

/// Compiler that sorts keyword conjunctions with `comparator`.
pub fn sorted_compiler(comparator: KeywordComparator) -> Compiler {
    Compiler::new(Settings {
        sort: KeywordSort::by(comparator),
        ..Settings::default()
    })
}

// ---------------------------------------------------------------------------
// NoteName
// ---------------------------------------------------------------------------

/// Fluent builder for note filenames.
///
/// # Example
///
/// ```rust
/// let name = NoteName::new("20240115T090500")
///     .title("weekly-review")
///     .keywords(["review", "work"])
///     .extension(".org")
///     .build();
/// assert_eq!(name, "20240115T090500--weekly-review__review_work.org");
/// ```
pub struct NoteName {
    identifier: String,
    signature: Option<String>,
    title: Option<String>,
    keywords: Vec<String>,
    extension: String,
    order: Vec<FieldName>,
}

impl NoteName {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            signature: None,
            title: None,
            keywords: Vec::new(),
            extension: ".org".to_string(),
            order: ComponentOrder::default().fields().to_vec(),
        }
    }

    pub fn signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn keywords<const N: usize>(mut self, keywords: [&str; N]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn order(mut self, order: &[FieldName]) -> Self {
        self.order = order.to_vec();
        self
    }

    pub fn build(self) -> String {
        let mut out = String::new();
        for (i, field) in self.order.iter().enumerate() {
            match field {
                FieldName::Identifier => {
                    if i > 0 {
                        out.push_str("@@");
                    }
                    out.push_str(&self.identifier);
                }
                FieldName::Signature => {
                    if let Some(s) = &self.signature {
                        out.push_str("==");
                        out.push_str(s);
                    }
                }
                FieldName::Title => {
                    if let Some(t) = &self.title {
                        out.push_str("--");
                        out.push_str(t);
                    }
                }
                FieldName::Keywords => {
                    if !self.keywords.is_empty() {
                        out.push_str("__");
                        out.push_str(&self.keywords.join("_"));
                    }
                }
                FieldName::FileType => {}
            }
        }
        out.push_str(&self.extension);
        out
    }
}
