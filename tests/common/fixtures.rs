//! Static filename corpora used across harnesses.
//!
//! All names follow the default component order:
//! identifier, signature, title, keywords, extension.

/// A small archive of note filenames in various shapes.
pub const CORPUS: &[&str] = &[
    "20240115T090500--weekly-review__review_work.org",
    "20240115T101500==1a--reading-list__books.md",
    "20240116T080000--standup-notes__inprogress_project_work.org",
    "20240201T120000--agenda__agenda.txt",
    "20240202T130000--untitled.org",
    "20240203T140000==2b__inbox.org",
    "20231231T235959--year-in-review__journal_review.md",
    "20240115T090501--trusty-tools__trusty.org",
    "20240204T150000--plan__agenda_work.org",
];

/// Names that do not follow the convention at all.
pub const NOISE: &[&str] = &["README.md", "notes.org", "", "__agenda", "2024.txt"];

/// Select the corpus entries `re` matches, in corpus order.
pub fn matching<'a>(re: &regex::Regex, names: &[&'a str]) -> Vec<&'a str> {
    names.iter().copied().filter(|n| re.is_match(n)).collect()
}
