//! Pattern assembly — stitches per-field fragments into one filename pattern.
//!
//! Fields are visited in the configured component order with `file-type`
//! always last. Absent fields leave no trace; a wildcard separates each pair
//! of consecutive present fields. No constraints supplied ⇒ the result is the
//! identity fragment, which matches every filename.

use crate::error::Result;
use crate::fragment::PatternFragment;
use crate::translate::{translate_field, TranslateContext};
use crate::types::FieldInput;

/// Assemble the pattern for `input`.
pub fn assemble(input: &FieldInput, cx: &TranslateContext<'_>) -> Result<PatternFragment> {
    let mut fragments = Vec::new();
    for field in cx.order.visit_order() {
        if let Some(fragment) = translate_field(field, input, cx)? {
            fragments.push(fragment);
        }
    }
    tracing::debug!(fields = fragments.len(), "assembled filename pattern");
    Ok(PatternFragment::separated(fragments))
}
