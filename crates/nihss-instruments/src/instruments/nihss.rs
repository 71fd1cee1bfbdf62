use nihss_core::models::item::{MAX_TOTAL, ScoreItem};

use crate::Instrument;
use crate::scoring::{Domain, ScoreEntry, ScoreRange, ScoreType, Subscale};

/// NIHSS: National Institutes of Health Stroke Scale.
/// 15 items, each rated from 0 to an item-specific maximum (2–4). Total 0–42.
pub struct Nihss;

impl Nihss {
    /// Raw entries for every item present in `raw`, ready for
    /// [`Instrument::validate_scores`].
    pub fn entries(raw: &[(ScoreItem, i64)]) -> Vec<ScoreEntry> {
        raw.iter()
            .map(|(item, value)| ScoreEntry {
                subscale_id: item.key().to_string(),
                value: *value,
            })
            .collect()
    }
}

impl Instrument for Nihss {
    fn id(&self) -> &str {
        "nihss"
    }

    fn name(&self) -> &str {
        "NIHSS"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let groups: [(&str, &str, &[ScoreItem]); 7] = [
                (
                    "consciousness",
                    "Level of Consciousness",
                    &[ScoreItem::Loc, ScoreItem::LocQuestions, ScoreItem::LocCommands],
                ),
                (
                    "oculomotor_visual",
                    "Gaze and Visual Fields",
                    &[ScoreItem::BestGaze, ScoreItem::Visual],
                ),
                ("facial", "Facial Palsy", &[ScoreItem::FacialPalsy]),
                ("motor", "Limb Motor", &ScoreItem::MOTOR),
                (
                    "coordination_sensation",
                    "Ataxia and Sensation",
                    &[ScoreItem::LimbAtaxia, ScoreItem::Sensory],
                ),
                (
                    "language_speech",
                    "Language and Speech",
                    &[ScoreItem::BestLanguage, ScoreItem::Dysarthria],
                ),
                ("neglect", "Extinction and Inattention", &[ScoreItem::Extinction]),
            ];

            let mut domains: Vec<Domain> = groups
                .iter()
                .map(|(id, name, items)| Domain {
                    id: id.to_string(),
                    name: name.to_string(),
                    subscales: items.iter().map(|item| subscale(*item)).collect(),
                    composite_score_type: None,
                    composite_range: None,
                    description: None,
                })
                .collect();

            if let Some(motor) = domains.iter_mut().find(|d| d.id == "motor") {
                motor.composite_score_type = Some(ScoreType::Raw);
                motor.composite_range = Some(ScoreRange { min: 0, max: 16 });
            }

            domains.push(Domain {
                id: "nihss_total".to_string(),
                name: "NIHSS Total".to_string(),
                subscales: Vec::new(),
                composite_score_type: Some(ScoreType::Raw),
                composite_range: Some(ScoreRange {
                    min: 0,
                    max: i64::from(MAX_TOTAL),
                }),
                description: Some(
                    "0: no stroke symptoms, 1-4: minor, 5-15: moderate, \
                     16-20: moderate to severe, 21-42: severe"
                        .to_string(),
                ),
            });

            domains
        });
        &DOMAINS
    }
}

fn subscale(item: ScoreItem) -> Subscale {
    Subscale {
        id: item.key().to_string(),
        code: item.code().to_string(),
        name: item.description().to_string(),
        score_type: ScoreType::Rating,
        range: ScoreRange {
            min: 0,
            max: i64::from(item.max()),
        },
        description: None,
    }
}
