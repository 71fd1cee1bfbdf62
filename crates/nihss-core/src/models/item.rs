use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::UnknownItem;

/// Sum of every item maximum.
pub const MAX_TOTAL: u8 = 42;

/// One of the 15 NIHSS items, declared in clinical exam order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreItem {
    Loc,
    LocQuestions,
    LocCommands,
    BestGaze,
    Visual,
    FacialPalsy,
    MotorArmLeft,
    MotorArmRight,
    MotorLegLeft,
    MotorLegRight,
    LimbAtaxia,
    Sensory,
    BestLanguage,
    Dysarthria,
    Extinction,
}

impl ScoreItem {
    pub const COUNT: usize = 15;

    pub const ALL: [ScoreItem; Self::COUNT] = [
        ScoreItem::Loc,
        ScoreItem::LocQuestions,
        ScoreItem::LocCommands,
        ScoreItem::BestGaze,
        ScoreItem::Visual,
        ScoreItem::FacialPalsy,
        ScoreItem::MotorArmLeft,
        ScoreItem::MotorArmRight,
        ScoreItem::MotorLegLeft,
        ScoreItem::MotorLegRight,
        ScoreItem::LimbAtaxia,
        ScoreItem::Sensory,
        ScoreItem::BestLanguage,
        ScoreItem::Dysarthria,
        ScoreItem::Extinction,
    ];

    /// The four limb-motor items (5a, 5b, 6a, 6b).
    pub const MOTOR: [ScoreItem; 4] = [
        ScoreItem::MotorArmLeft,
        ScoreItem::MotorArmRight,
        ScoreItem::MotorLegLeft,
        ScoreItem::MotorLegRight,
    ];

    /// Position of this item in [`ScoreItem::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Wire key used in payloads, e.g. `"motor_arm_left"`.
    pub fn key(self) -> &'static str {
        match self {
            ScoreItem::Loc => "loc",
            ScoreItem::LocQuestions => "loc_questions",
            ScoreItem::LocCommands => "loc_commands",
            ScoreItem::BestGaze => "best_gaze",
            ScoreItem::Visual => "visual",
            ScoreItem::FacialPalsy => "facial_palsy",
            ScoreItem::MotorArmLeft => "motor_arm_left",
            ScoreItem::MotorArmRight => "motor_arm_right",
            ScoreItem::MotorLegLeft => "motor_leg_left",
            ScoreItem::MotorLegRight => "motor_leg_right",
            ScoreItem::LimbAtaxia => "limb_ataxia",
            ScoreItem::Sensory => "sensory",
            ScoreItem::BestLanguage => "best_language",
            ScoreItem::Dysarthria => "dysarthria",
            ScoreItem::Extinction => "extinction",
        }
    }

    /// Item number on the printed scale, e.g. `"5a"`.
    pub fn code(self) -> &'static str {
        match self {
            ScoreItem::Loc => "1a",
            ScoreItem::LocQuestions => "1b",
            ScoreItem::LocCommands => "1c",
            ScoreItem::BestGaze => "2",
            ScoreItem::Visual => "3",
            ScoreItem::FacialPalsy => "4",
            ScoreItem::MotorArmLeft => "5a",
            ScoreItem::MotorArmRight => "5b",
            ScoreItem::MotorLegLeft => "6a",
            ScoreItem::MotorLegRight => "6b",
            ScoreItem::LimbAtaxia => "7",
            ScoreItem::Sensory => "8",
            ScoreItem::BestLanguage => "9",
            ScoreItem::Dysarthria => "10",
            ScoreItem::Extinction => "11",
        }
    }

    /// Highest score the item can take.
    pub fn max(self) -> u8 {
        match self {
            ScoreItem::Loc | ScoreItem::Visual | ScoreItem::FacialPalsy | ScoreItem::BestLanguage => 3,
            ScoreItem::MotorArmLeft
            | ScoreItem::MotorArmRight
            | ScoreItem::MotorLegLeft
            | ScoreItem::MotorLegRight => 4,
            ScoreItem::LocQuestions
            | ScoreItem::LocCommands
            | ScoreItem::BestGaze
            | ScoreItem::LimbAtaxia
            | ScoreItem::Sensory
            | ScoreItem::Dysarthria
            | ScoreItem::Extinction => 2,
        }
    }

    /// Human-readable item name.
    pub fn description(self) -> &'static str {
        match self {
            ScoreItem::Loc => "Level of consciousness",
            ScoreItem::LocQuestions => "LOC questions (month, age)",
            ScoreItem::LocCommands => "LOC commands",
            ScoreItem::BestGaze => "Best gaze",
            ScoreItem::Visual => "Visual fields",
            ScoreItem::FacialPalsy => "Facial palsy",
            ScoreItem::MotorArmLeft => "Motor function, left arm",
            ScoreItem::MotorArmRight => "Motor function, right arm",
            ScoreItem::MotorLegLeft => "Motor function, left leg",
            ScoreItem::MotorLegRight => "Motor function, right leg",
            ScoreItem::LimbAtaxia => "Limb ataxia",
            ScoreItem::Sensory => "Sensory",
            ScoreItem::BestLanguage => "Best language / aphasia",
            ScoreItem::Dysarthria => "Dysarthria",
            ScoreItem::Extinction => "Extinction and inattention",
        }
    }

    /// Clamp a raw value into `[0, max]`.
    pub fn clamp(self, raw: i64) -> u8 {
        // max() <= 4, so the narrowing cast cannot truncate.
        raw.clamp(0, i64::from(self.max())) as u8
    }
}

impl fmt::Display for ScoreItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ScoreItem {
    type Err = UnknownItem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScoreItem::ALL
            .into_iter()
            .find(|item| item.key() == s)
            .ok_or_else(|| UnknownItem(s.to_string()))
    }
}
