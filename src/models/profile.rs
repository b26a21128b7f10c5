use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strsim::jaro_winkler;

use crate::engine::constants::{AGE_RANGE, HEIGHT_RANGE_CM, WEIGHT_RANGE_KG};
use crate::error::{PlannerError, Result};

/// Minimum Jaro-Winkler score for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Find the closest identifier to `input` (case-insensitive).
fn closest_match(input: &str, candidates: &[&str]) -> Option<String> {
    let input = input.trim().to_lowercase();
    candidates
        .iter()
        .map(|c| (*c, jaro_winkler(c, &input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(c, _)| c.to_string())
}

/// Biological sex, used for the BMR offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    pub fn all() -> &'static [Sex] {
        &[Sex::Male, Sex::Female]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl FromStr for Sex {
    type Err = PlannerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(PlannerError::UnknownSex {
                value: s.to_string(),
                suggestion: closest_match(s, &["male", "female"]),
            }),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Health goal selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    #[default]
    Maintain,
    Lose,
    Gain,
    Sugar,
    Cholesterol,
    Pressure,
}

impl Goal {
    pub fn all() -> &'static [Goal] {
        &[
            Goal::Maintain,
            Goal::Lose,
            Goal::Gain,
            Goal::Sugar,
            Goal::Cholesterol,
            Goal::Pressure,
        ]
    }

    /// Identifier used on the command line and in profile files.
    pub fn id(&self) -> &'static str {
        match self {
            Goal::Maintain => "maintain",
            Goal::Lose => "lose",
            Goal::Gain => "gain",
            Goal::Sugar => "sugar",
            Goal::Cholesterol => "cholesterol",
            Goal::Pressure => "pressure",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Goal::Maintain => "Maintain Weight",
            Goal::Lose => "Weight Loss",
            Goal::Gain => "Weight Gain",
            Goal::Sugar => "Lower Sugar / Pre-diabetic",
            Goal::Cholesterol => "Lower LDL Cholesterol",
            Goal::Pressure => "Lower Blood Pressure",
        }
    }
}

impl FromStr for Goal {
    type Err = PlannerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Goal::all()
            .iter()
            .find(|g| g.id() == needle)
            .copied()
            .ok_or_else(|| {
                let ids: Vec<&str> = Goal::all().iter().map(|g| g.id()).collect();
                PlannerError::UnknownGoal {
                    value: s.to_string(),
                    suggestion: closest_match(s, &ids),
                }
            })
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Activity level with its fixed TDEE multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActivityLevel {
    Sedentary,
    #[default]
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    pub fn all() -> &'static [ActivityLevel] {
        &[
            ActivityLevel::Sedentary,
            ActivityLevel::LightlyActive,
            ActivityLevel::ModeratelyActive,
            ActivityLevel::VeryActive,
            ActivityLevel::ExtraActive,
        ]
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "light",
            ActivityLevel::ModeratelyActive => "moderate",
            ActivityLevel::VeryActive => "very",
            ActivityLevel::ExtraActive => "extra",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (Little/no exercise)",
            ActivityLevel::LightlyActive => "Lightly Active (1-3 days/week)",
            ActivityLevel::ModeratelyActive => "Moderately Active (3-5 days/week)",
            ActivityLevel::VeryActive => "Very Active (6-7 days/week)",
            ActivityLevel::ExtraActive => "Extra Active (Athletic/Physical job)",
        }
    }

    /// Look up the level whose multiplier equals `value`.
    pub fn from_multiplier(value: f64) -> Option<ActivityLevel> {
        ActivityLevel::all()
            .iter()
            .find(|a| (a.multiplier() - value).abs() < 1e-9)
            .copied()
    }
}

impl FromStr for ActivityLevel {
    type Err = PlannerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();

        if let Some(level) = ActivityLevel::all().iter().find(|a| a.id() == needle) {
            return Ok(*level);
        }

        // "1.375" style input
        if let Some(level) = needle
            .parse::<f64>()
            .ok()
            .and_then(ActivityLevel::from_multiplier)
        {
            return Ok(level);
        }

        let ids: Vec<&str> = ActivityLevel::all().iter().map(|a| a.id()).collect();
        Err(PlannerError::UnknownActivity {
            value: s.to_string(),
            suggestion: closest_match(s, &ids),
        })
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl Serialize for ActivityLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.multiplier())
    }
}

impl<'de> Deserialize<'de> for ActivityLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        ActivityLevel::from_multiplier(value).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "activity multiplier must be one of 1.2, 1.375, 1.55, 1.725, 1.9 (got {})",
                value
            ))
        })
    }
}

/// The inputs of one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub sex: Sex,

    /// Age in whole years.
    pub age: u32,

    /// Body weight in kilograms.
    pub weight: f64,

    /// Height in centimetres.
    pub height: f64,

    pub activity: ActivityLevel,

    #[serde(default)]
    pub goal: Goal,
}

impl Default for UserProfile {
    /// The calculator form's initial values.
    fn default() -> Self {
        Self {
            sex: Sex::Male,
            age: 30,
            weight: 75.0,
            height: 175.0,
            activity: ActivityLevel::LightlyActive,
            goal: Goal::Maintain,
        }
    }
}

impl UserProfile {
    pub fn new(
        sex: Sex,
        age: u32,
        weight: f64,
        height: f64,
        activity: ActivityLevel,
        goal: Goal,
    ) -> Self {
        Self {
            sex,
            age,
            weight,
            height,
            activity,
            goal,
        }
    }

    /// Check the profile against the accepted input ranges.
    pub fn validate(&self) -> Result<()> {
        if !AGE_RANGE.contains(&self.age) {
            return Err(PlannerError::InvalidProfile(format!(
                "age must be between {} and {} years (got {})",
                AGE_RANGE.start(),
                AGE_RANGE.end(),
                self.age
            )));
        }

        if !self.weight.is_finite() || !WEIGHT_RANGE_KG.contains(&self.weight) {
            return Err(PlannerError::InvalidProfile(format!(
                "weight must be between {} and {} kg (got {})",
                WEIGHT_RANGE_KG.start(),
                WEIGHT_RANGE_KG.end(),
                self.weight
            )));
        }

        if !self.height.is_finite() || !HEIGHT_RANGE_CM.contains(&self.height) {
            return Err(PlannerError::InvalidProfile(format!(
                "height must be between {} and {} cm (got {})",
                HEIGHT_RANGE_CM.start(),
                HEIGHT_RANGE_CM.end(),
                self.height
            )));
        }

        Ok(())
    }
}
