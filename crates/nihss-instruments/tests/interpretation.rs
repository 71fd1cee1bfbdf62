use nihss_core::models::item::ScoreItem;
use nihss_core::models::score_set::ScoreSet;
use nihss_core::models::severity::SeverityTier;
use nihss_instruments::evaluate;
use nihss_instruments::interpretation::{
    DOMAIN_RULES, consciousness_sentence, headline, interpret, language_sentence, motor_sentence,
    recommendation, sentences, visual_sentence,
};

#[test]
fn worked_example_narrative() {
    let scores = ScoreSet::from_raw([
        ("loc", 1),
        ("best_language", 2),
        ("motor_arm_left", 3),
        ("motor_leg_left", 2),
    ]);
    let result = evaluate(&scores);
    let lines = sentences(&scores, result.total_score, result.severity);

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "NIHSS total score: 8/42, Moderate stroke.");
    assert_eq!(lines[1], "Level of consciousness: impaired (drowsy).");
    assert_eq!(lines[2], "Language: severe aphasia.");
    assert_eq!(lines[3], "Motor deficit: 5/16 points combined.");
    assert_eq!(lines[4], recommendation(SeverityTier::Moderate));
    assert!(!result.interpretation.contains("Visual fields"));
    assert_eq!(result.interpretation, lines.join(" "));
}

#[test]
fn no_deficits_yields_headline_and_recommendation_only() {
    let scores = ScoreSet::new();
    let lines = sentences(&scores, 0, SeverityTier::NoStroke);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], headline(0, SeverityTier::NoStroke));
    assert_eq!(lines[1], recommendation(SeverityTier::NoStroke));
}

#[test]
fn domain_sentences_follow_fixed_order() {
    // Visual and consciousness set "out of order" in the input.
    let scores = ScoreSet::from_raw([("visual", 1), ("motor_leg_right", 4), ("loc", 3)]);
    let text = interpret(&scores, scores.total(), SeverityTier::Moderate);

    let loc = text.find("Level of consciousness").unwrap();
    let motor = text.find("Motor deficit").unwrap();
    let visual = text.find("Visual fields").unwrap();
    assert!(text.starts_with("NIHSS total score: 8/42"));
    assert!(loc < motor && motor < visual);
    assert!(!text.contains("Language:"));
    assert!(text.ends_with(recommendation(SeverityTier::Moderate)));
}

#[test]
fn rule_table_order() {
    let names: Vec<_> = DOMAIN_RULES.iter().map(|r| r.domain).collect();
    assert_eq!(names, ["consciousness", "language", "motor", "visual"]);
}

#[test]
fn consciousness_levels() {
    let at = |v| consciousness_sentence(&ScoreSet::new().with(ScoreItem::Loc, v));
    assert_eq!(at(0), None);
    assert_eq!(at(1).unwrap(), "Level of consciousness: impaired (drowsy).");
    assert_eq!(at(2).unwrap(), "Level of consciousness: severely impaired (stuporous).");
    assert_eq!(at(3).unwrap(), "Level of consciousness: coma or unresponsive.");
}

#[test]
fn language_levels() {
    let at = |v| language_sentence(&ScoreSet::new().with(ScoreItem::BestLanguage, v));
    assert_eq!(at(0), None);
    assert_eq!(at(1).unwrap(), "Language: mild to moderate aphasia.");
    assert_eq!(at(2).unwrap(), "Language: severe aphasia.");
    assert_eq!(at(3).unwrap(), "Language: mute or global aphasia.");
}

#[test]
fn visual_levels() {
    let at = |v| visual_sentence(&ScoreSet::new().with(ScoreItem::Visual, v));
    assert_eq!(at(0), None);
    assert_eq!(at(1).unwrap(), "Visual fields: partial hemianopia.");
    assert_eq!(at(2).unwrap(), "Visual fields: complete hemianopia.");
    assert_eq!(at(3).unwrap(), "Visual fields: bilateral blindness.");
}

#[test]
fn clamped_level_uses_table_not_generic_phrase() {
    let scores = ScoreSet::new().with(ScoreItem::Loc, 7);
    assert_eq!(
        consciousness_sentence(&scores).unwrap(),
        "Level of consciousness: coma or unresponsive."
    );
}

#[test]
fn motor_sentence_sums_all_four_limbs() {
    assert_eq!(motor_sentence(&ScoreSet::new()), None);
    let scores = ScoreSet::from_raw([
        ("motor_arm_left", 4),
        ("motor_arm_right", 4),
        ("motor_leg_left", 4),
        ("motor_leg_right", 4),
    ]);
    assert_eq!(
        motor_sentence(&scores).unwrap(),
        "Motor deficit: 16/16 points combined."
    );
}

#[test]
fn non_governing_items_do_not_add_sentences() {
    let scores = ScoreSet::from_raw([("loc_questions", 2), ("dysarthria", 2), ("sensory", 1)]);
    let lines = sentences(&scores, scores.total(), SeverityTier::Moderate);
    assert_eq!(lines.len(), 2);
}

#[test]
fn each_tier_has_a_distinct_recommendation() {
    let mut seen = std::collections::HashSet::new();
    for tier in SeverityTier::ALL {
        assert!(seen.insert(recommendation(tier)));
    }
}
