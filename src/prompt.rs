//! Prompt composition: folds the user's base text, the style preset's
//! keyword hint, and the role's instruction clause into the one string sent
//! to the image provider.

use crate::models::{Role, StylePreset};

const CLAUSE_SEPARATOR: &str = ", ";

/// Build the final prompt. Pure and deterministic.
///
/// Clause order is fixed: base text first, then the style hint, then the
/// role instruction, joined with `", "`. A non-empty negative prompt is
/// concatenated afterwards as `". Avoid: {negative}."` rather than joined
/// like the other clauses; downstream consumers depend on that exact shape.
/// Presets whose hint is empty simply contribute nothing.
pub fn compose(role: Role, base_text: &str, style: StylePreset, negative_text: &str) -> String {
    let mut clauses: Vec<&str> = Vec::with_capacity(3);

    let base = base_text.trim();
    if !base.is_empty() {
        clauses.push(base);
    }

    let hint = style.hint();
    if !hint.is_empty() {
        clauses.push(hint);
    }

    let instruction = role.instruction();
    if !instruction.is_empty() {
        clauses.push(instruction);
    }

    let mut composed = clauses.join(CLAUSE_SEPARATOR);

    let negative = negative_text.trim();
    if !negative.is_empty() {
        composed.push_str(". Avoid: ");
        composed.push_str(negative);
        composed.push('.');
    }

    composed
}
