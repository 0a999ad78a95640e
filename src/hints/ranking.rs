//! Ranking and display rendering of filtered candidates

use super::extract::Declaration;

/// Separator between the insertable name and its supplementary value in
/// a display form. Hosts that split display forms for styling (the value
/// is rendered de-emphasized) split on the first occurrence.
pub const DISPLAY_SEPARATOR: &str = ": ";

/// Sorts candidates by name, case-insensitive lexicographic ascending.
/// Names equal under the case-insensitive compare keep their relative
/// order.
pub fn rank_candidates(candidates: &mut [Declaration]) {
    candidates.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
}

/// Renders one candidate for the hint list: the insertable name followed
/// by its value. Only the name is ever inserted into the document.
pub fn render_display_form(declaration: &Declaration) -> String {
    format!(
        "{}{}{}",
        declaration.name, DISPLAY_SEPARATOR, declaration.value
    )
}

/// Renders the whole candidate list, index-aligned with its input.
pub fn render_display_forms(candidates: &[Declaration]) -> Vec<String> {
    candidates.iter().map(render_display_form).collect()
}
