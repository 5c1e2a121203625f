//! Rendering abstract fragments into concrete pattern text.
//!
//! [`RegexRenderer`] targets the `regex` crate. Most operators map directly
//! onto regex syntax. Word anchors do not: in note filenames `_` separates
//! keywords, so a keyword boundary is any non-alphanumeric character, while
//! `\b` in `regex` treats `_` as part of a word. Since `regex` has no
//! look-around, each anchor is resolved against its neighbours instead:
//!
//! - an anchor next to a literal is decided statically (dropped, or turned
//!   into a never-matching class);
//! - a wildcard next to an anchor takes the boundary on itself, e.g.
//!   `WordEnd, AnyRepeat, WordStart` renders as `[\W_](?:.*[\W_])?`;
//! - an anchor at the outer edge of the pattern consumes one separator
//!   character or matches at the edge of the haystack;
//! - anything else falls back to `\b{start-half}` / `\b{end-half}`.

use crate::fragment::PatternFragment;

/// Turns a [`PatternFragment`] into pattern text.
pub trait Render {
    fn render(&self, fragment: &PatternFragment) -> String;
}

/// Renders fragments as `regex` crate syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexRenderer;

impl Render for RegexRenderer {
    fn render(&self, fragment: &PatternFragment) -> String {
        let mut out = String::new();
        render_seq(&flatten(fragment), Edge::Start, Edge::End, false, &mut out);
        out
    }
}

/// A character that separates words.
const SEP: &str = r"[\W_]";
/// A class that matches nothing.
const NEVER: &str = r"[^\s\S]";

/// What is known about the character on one side of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    /// Outer start of the pattern; the haystack may continue to the left.
    Start,
    /// Outer end of the pattern; the haystack may continue to the right.
    End,
    Sep,
    Word,
    Unknown,
}

impl Edge {
    fn of(c: char) -> Edge {
        if c.is_alphanumeric() {
            Edge::Word
        } else {
            Edge::Sep
        }
    }

    fn join(self, other: Edge) -> Edge {
        match (self, other) {
            (a, b) if a == b => a,
            (Edge::Sep, Edge::End) | (Edge::End, Edge::Sep) => Edge::End,
            _ => Edge::Unknown,
        }
    }
}

/// Inline nested sequences so anchors can see their real neighbours.
fn flatten(fragment: &PatternFragment) -> Vec<&PatternFragment> {
    match fragment {
        PatternFragment::Sequence(parts) => parts.iter().flat_map(flatten).collect(),
        other => vec![other],
    }
}

fn leads_with_word_start(fragment: &PatternFragment) -> bool {
    match fragment {
        PatternFragment::WordStart => true,
        PatternFragment::Sequence(parts) => parts.first().is_some_and(leads_with_word_start),
        PatternFragment::Alternation(branches) => {
            !branches.is_empty() && branches.iter().all(leads_with_word_start)
        }
        _ => false,
    }
}

fn trails_with_word_end(fragment: &PatternFragment) -> bool {
    match fragment {
        PatternFragment::WordEnd => true,
        PatternFragment::Sequence(parts) => parts.last().is_some_and(trails_with_word_end),
        PatternFragment::Alternation(branches) => {
            !branches.is_empty() && branches.iter().all(trails_with_word_end)
        }
        _ => false,
    }
}

/// The first character class `items` can produce; `right` if they produce
/// nothing.
fn first_edge(items: &[&PatternFragment], right: Edge) -> Edge {
    for (i, item) in items.iter().enumerate() {
        match item {
            PatternFragment::Literal(s) => match s.chars().next() {
                Some(c) => return Edge::of(c),
                None => continue,
            },
            PatternFragment::WordStart | PatternFragment::WordEnd => continue,
            PatternFragment::AnyExactly(0) => continue,
            PatternFragment::AnyRepeat | PatternFragment::AnyExactly(_) => return Edge::Unknown,
            // Nothing follows the end of the input, so any boundary holds.
            PatternFragment::EndOfInput => return Edge::Sep,
            PatternFragment::Alternation(branches) => {
                let after = first_edge(&items[i + 1..], right);
                return branches
                    .iter()
                    .map(|b| first_edge(&flatten(b), after))
                    .reduce(Edge::join)
                    .unwrap_or(Edge::Unknown);
            }
            PatternFragment::Sequence(parts) => {
                let after = first_edge(&items[i + 1..], right);
                return first_edge(&parts.iter().collect::<Vec<_>>(), after);
            }
        }
    }
    right
}

/// Render `items` given the edge before them and the edge after them.
/// Returns the edge left behind by the last item.
///
/// `wildcard_after` is set when the caller renders an `AnyRepeat` right
/// after `items` that takes over a trailing word end.
fn render_seq(
    items: &[&PatternFragment],
    mut left: Edge,
    right: Edge,
    wildcard_after: bool,
    out: &mut String,
) -> Edge {
    for (i, item) in items.iter().enumerate() {
        let wildcard_follows = match items.get(i + 1) {
            Some(PatternFragment::AnyRepeat) => true,
            Some(_) => false,
            None => wildcard_after,
        };
        match item {
            PatternFragment::Literal(s) => {
                if let Some(last) = s.chars().last() {
                    out.push_str(&regex::escape(s));
                    left = Edge::of(last);
                }
            }
            PatternFragment::AnyExactly(0) => {}
            PatternFragment::AnyExactly(n) => {
                out.push_str(&format!(".{{{n}}}"));
                left = Edge::Unknown;
            }
            PatternFragment::EndOfInput => out.push_str(r"\z"),
            PatternFragment::WordStart => match left {
                Edge::Sep => {}
                Edge::Word => out.push_str(NEVER),
                Edge::Start => {
                    out.push_str(&format!("(?:^|{SEP})"));
                    left = Edge::Sep;
                }
                Edge::End | Edge::Unknown => out.push_str(r"\b{start-half}"),
            },
            PatternFragment::WordEnd => {
                if wildcard_follows {
                    // The wildcard carries the boundary.
                    continue;
                }
                match first_edge(&items[i + 1..], right) {
                    Edge::Sep => {}
                    Edge::Word => out.push_str(NEVER),
                    Edge::End => out.push_str(&format!("(?:{SEP}|$)")),
                    Edge::Start | Edge::Unknown => out.push_str(r"\b{end-half}"),
                }
            }
            PatternFragment::AnyRepeat => {
                let after_word = i > 0 && trails_with_word_end(items[i - 1]);
                let before_word = items.get(i + 1).is_some_and(|n| leads_with_word_start(n));
                let next = first_edge(&items[i + 1..], right);
                left = render_wildcard(after_word, before_word, left, next, out);
            }
            PatternFragment::Alternation(branches) => {
                if branches.is_empty() {
                    out.push_str(NEVER);
                    left = Edge::Unknown;
                    continue;
                }
                let after = first_edge(&items[i + 1..], right);
                let defer = wildcard_follows && trails_with_word_end(item);
                let mut rendered = Vec::with_capacity(branches.len());
                let mut edge: Option<Edge> = None;
                for branch in branches {
                    let mut text = String::new();
                    let end = render_seq(&flatten(branch), left, after, defer, &mut text);
                    edge = Some(edge.map_or(end, |e| e.join(end)));
                    rendered.push(text);
                }
                out.push_str("(?:");
                out.push_str(&rendered.join("|"));
                out.push(')');
                left = edge.unwrap_or(Edge::Unknown);
            }
            PatternFragment::Sequence(parts) => {
                let after = first_edge(&items[i + 1..], right);
                let defer = wildcard_follows && trails_with_word_end(item);
                left = render_seq(&parts.iter().collect::<Vec<_>>(), left, after, defer, out);
            }
        }
    }
    left
}

/// Render `.*`, absorbing an adjacent word end (`after_word`) and/or word
/// start (`before_word`).
fn render_wildcard(
    after_word: bool,
    before_word: bool,
    left: Edge,
    next: Edge,
    out: &mut String,
) -> Edge {
    match (after_word, before_word) {
        (false, false) => {
            out.push_str(".*");
            Edge::Unknown
        }
        (false, true) => {
            match left {
                Edge::Sep => out.push_str(&format!("(?:.*{SEP})?")),
                Edge::Start => out.push_str(&format!("(?:^|.*{SEP})")),
                _ => out.push_str(&format!(".*{SEP}")),
            }
            Edge::Sep
        }
        (true, false) => {
            match next {
                Edge::Sep => out.push_str(&format!("(?:{SEP}.*)?")),
                Edge::End => out.push_str(&format!("(?:{SEP}.*|$)")),
                _ => out.push_str(&format!("{SEP}.*")),
            }
            Edge::Unknown
        }
        (true, true) => {
            let body = format!("{SEP}(?:.*{SEP})?");
            if left == Edge::Sep && next == Edge::Sep {
                out.push_str(&format!("(?:{body})?"));
            } else {
                out.push_str(&body);
            }
            Edge::Sep
        }
    }
}
