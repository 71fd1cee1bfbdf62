//! Deterministic clinical narrative.
//!
//! The narrative is a headline, then one sentence per affected domain, then
//! a tier-specific recommendation. Domain sentences come from [`DOMAIN_RULES`],
//! evaluated in table order; each rule inspects the score set and either
//! contributes a sentence or stays silent.

use nihss_core::models::item::{MAX_TOTAL, ScoreItem};
use nihss_core::models::score_set::ScoreSet;
use nihss_core::models::severity::SeverityTier;

/// Maximum of the four limb-motor items combined.
pub const MOTOR_MAX: u8 = 16;

/// One narrative rule: a named domain and the sentence it contributes.
pub struct DomainRule {
    pub domain: &'static str,
    pub sentence: fn(&ScoreSet) -> Option<String>,
}

/// Domain rules in reporting order.
pub const DOMAIN_RULES: [DomainRule; 4] = [
    DomainRule {
        domain: "consciousness",
        sentence: consciousness_sentence,
    },
    DomainRule {
        domain: "language",
        sentence: language_sentence,
    },
    DomainRule {
        domain: "motor",
        sentence: motor_sentence,
    },
    DomainRule {
        domain: "visual",
        sentence: visual_sentence,
    },
];

const CONSCIOUSNESS_LEVELS: [&str; 3] = [
    "impaired (drowsy)",
    "severely impaired (stuporous)",
    "coma or unresponsive",
];

const LANGUAGE_LEVELS: [&str; 3] = [
    "mild to moderate aphasia",
    "severe aphasia",
    "mute or global aphasia",
];

const VISUAL_LEVELS: [&str; 3] = [
    "partial hemianopia",
    "complete hemianopia",
    "bilateral blindness",
];

/// Build the full narrative for an assessment.
///
/// `total` and `severity` are taken as given so that a caller holding a
/// stored result can regenerate the same text.
pub fn interpret(scores: &ScoreSet, total: u8, severity: SeverityTier) -> String {
    sentences(scores, total, severity).join(" ")
}

/// The narrative as individual sentences, headline first and recommendation
/// last.
pub fn sentences(scores: &ScoreSet, total: u8, severity: SeverityTier) -> Vec<String> {
    let mut lines = Vec::with_capacity(DOMAIN_RULES.len() + 2);
    lines.push(headline(total, severity));
    lines.extend(DOMAIN_RULES.iter().filter_map(|rule| (rule.sentence)(scores)));
    lines.push(recommendation(severity).to_string());
    lines
}

pub fn headline(total: u8, severity: SeverityTier) -> String {
    format!("NIHSS total score: {total}/{MAX_TOTAL}, {}.", severity.label())
}

pub fn consciousness_sentence(scores: &ScoreSet) -> Option<String> {
    let level = leveled(scores.get(ScoreItem::Loc), &CONSCIOUSNESS_LEVELS, "impaired")?;
    Some(format!("Level of consciousness: {level}."))
}

pub fn language_sentence(scores: &ScoreSet) -> Option<String> {
    let level = leveled(scores.get(ScoreItem::BestLanguage), &LANGUAGE_LEVELS, "impaired")?;
    Some(format!("Language: {level}."))
}

pub fn motor_sentence(scores: &ScoreSet) -> Option<String> {
    let motor = scores.motor_total();
    (motor > 0).then(|| format!("Motor deficit: {motor}/{MOTOR_MAX} points combined."))
}

pub fn visual_sentence(scores: &ScoreSet) -> Option<String> {
    let level = leveled(scores.get(ScoreItem::Visual), &VISUAL_LEVELS, "deficit present")?;
    Some(format!("Visual fields: {level}."))
}

/// Care-pathway statement for a tier.
pub fn recommendation(severity: SeverityTier) -> &'static str {
    match severity {
        SeverityTier::NoStroke => {
            "No signs of acute stroke. Continued clinical observation is recommended."
        }
        SeverityTier::Minor => {
            "Minor stroke or TIA. Urgent imaging (MRI/CT), hospital admission, \
             antiplatelet therapy and vascular risk factor control are recommended."
        }
        SeverityTier::Moderate => {
            "Moderate stroke. Emergency admission to a stroke unit. Assess eligibility \
             for thrombolysis (rt-PA) within 4.5 hours and for mechanical thrombectomy \
             in large vessel occlusion."
        }
        SeverityTier::ModerateSevere => {
            "Moderate to severe stroke. Urgent admission to neurocritical care. Monitor \
             vital functions, obtain neuroimaging, consider reperfusion therapy and \
             neuroprotection."
        }
        SeverityTier::Severe => {
            "Severe stroke. Immediate admission to neurocritical care. Ventilatory support \
             if required, intensive monitoring, a multidisciplinary team, and evaluation \
             for surgical intervention (decompressive craniectomy)."
        }
    }
}

/// Phrase for a nonzero level, `None` for zero. Values past the table fall
/// back to `other`; clamping keeps that branch unreachable.
fn leveled(value: u8, levels: &[&'static str; 3], other: &'static str) -> Option<&'static str> {
    match value {
        0 => None,
        1..=3 => Some(levels[usize::from(value) - 1]),
        _ => Some(other),
    }
}
