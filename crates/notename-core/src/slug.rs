//! Text normalisation ("sluggification") for filename segments.
//!
//! The compiler only depends on the [`Normalize`] trait. [`Slugger`] is the
//! default implementation; callers with other filename conventions inject
//! their own, and any `Fn(SlugKind, &str) -> String` closure works as one.

/// Which segment a piece of text is being normalised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlugKind {
    Signature,
    Title,
    Keyword,
}

/// Turns free text into a filename-safe token.
///
/// Implementations must be deterministic and pure.
pub trait Normalize {
    fn normalize(&self, kind: SlugKind, raw: &str) -> String;
}

impl<F> Normalize for F
where
    F: Fn(SlugKind, &str) -> String,
{
    fn normalize(&self, kind: SlugKind, raw: &str) -> String {
        self(kind, raw)
    }
}

/// Default normaliser.
///
/// Lowercases, then: titles join alphanumeric runs with `-`, signatures join
/// them with `=`, and keywords drop everything that is not alphanumeric.
#[derive(Debug, Clone, Copy, Default)]
pub struct Slugger;

impl Normalize for Slugger {
    fn normalize(&self, kind: SlugKind, raw: &str) -> String {
        let lower = raw.to_lowercase();
        match kind {
            SlugKind::Title => join_words(&lower, '-'),
            SlugKind::Signature => join_words(&lower, '='),
            SlugKind::Keyword => lower.chars().filter(|c| c.is_alphanumeric()).collect(),
        }
    }
}

fn join_words(text: &str, sep: char) -> String {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(&sep.to_string())
}
