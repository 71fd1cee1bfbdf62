//! Prompt assembly for generated interpretations.

use nihss_core::models::item::MAX_TOTAL;
use nihss_core::models::request::PatientContext;
use nihss_core::models::score_set::ScoreSet;
use nihss_core::models::severity::SeverityTier;

pub const SYSTEM_PROMPT: &str = "\
You are an experienced neurologist. You receive the results of an NIHSS \
(National Institutes of Health Stroke Scale) assessment. Write a brief clinical \
summary for the treating physician, four to six sentences long, covering: \
what the total score means on the NIHSS; which neurological domains are most \
affected; and the recommended management (admission, reperfusion, monitoring). \
Use professional medical language and no introductory phrases.";

/// Marker used in place of the item list when every item scored zero.
pub const ALL_ITEMS_NORMAL: &str = "All items normal (0 points)";

/// Build the user message for one assessment.
///
/// Only nonzero items are listed, in exam order.
pub fn build_prompt(
    scores: &ScoreSet,
    total: u8,
    severity: SeverityTier,
    patient: &PatientContext,
) -> String {
    let mut prompt = String::from("Patient:\n");
    prompt.push_str(&format!("- Age: {} years\n", patient.age));
    let notes = patient.notes.trim();
    if !notes.is_empty() {
        prompt.push_str(&format!("- Clinician notes: {notes}\n"));
    }

    prompt.push_str("\nNIHSS results:\n");
    prompt.push_str(&format!("- Total score: {total} of {MAX_TOTAL}\n"));
    prompt.push_str(&format!("- Severity: {}\n", severity.label()));

    prompt.push_str("\nAffected items:\n");
    prompt.push_str(&affected_items(scores));
    prompt
}

/// Bullet list of nonzero items, or [`ALL_ITEMS_NORMAL`].
pub fn affected_items(scores: &ScoreSet) -> String {
    let lines: Vec<String> = scores
        .affected()
        .map(|(item, value)| {
            format!(
                "- {} ({}): {value} {}",
                item.description(),
                item.code(),
                if value == 1 { "point" } else { "points" }
            )
        })
        .collect();

    if lines.is_empty() {
        format!("- {ALL_ITEMS_NORMAL}\n")
    } else {
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
