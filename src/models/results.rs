use std::fmt;

use serde::Serialize;

/// Daily calorie target and macronutrient grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionResult {
    pub target_kcal: u32,
    pub protein_grams: u32,
    pub fat_grams: u32,
    pub carb_grams: u32,
    /// Upper limit; a share of `fat_grams`, not in addition to it.
    pub saturated_fat_grams: u32,
}

/// Hand-portion counts and water intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortionResult {
    /// Palms of protein.
    pub protein_portions: u32,
    /// Fists of carbohydrate.
    pub carb_portions: u32,
    /// Thumbs of fat.
    pub fat_portions: u32,
    /// 250 ml glasses.
    pub water_cups: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obese")]
    Obese,
}

/// How a BMI category should be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    Healthy,
    Caution,
    Alert,
}

impl BmiCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    pub fn indicator(&self) -> Indicator {
        match self {
            BmiCategory::NormalWeight => Indicator::Healthy,
            BmiCategory::Underweight | BmiCategory::Overweight => Indicator::Caution,
            BmiCategory::Obese => Indicator::Alert,
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Body weights (kg) at the BMI band boundaries for one height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiThresholds {
    /// Weight at BMI 18.5.
    pub underweight: f64,
    /// Weight at BMI 25.
    pub normal_end: f64,
    /// Weight at BMI 30.
    pub obese_start: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiResult {
    /// Rounded to one decimal.
    pub value: f64,
    pub category: BmiCategory,
    pub indicator: Indicator,
    pub thresholds: BmiThresholds,
    pub ideal_range: WeightRange,
}

/// Goal-specific advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalInfo {
    pub label: &'static str,
    pub text: &'static str,
}

/// A "daily mission" recommendation card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub icon: String,
    pub accessible_label: String,
    pub title: String,
    pub description: String,
}

impl Mission {
    pub fn new(
        icon: impl Into<String>,
        accessible_label: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            accessible_label: accessible_label.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A food option with its one-portion amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoodItem {
    pub name: &'static str,
    pub amount: &'static str,
}

/// One section of the food guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodCategory {
    pub title: &'static str,
    /// Portions per day.
    pub target: u32,
    /// "Target" or "Limit".
    pub target_label: &'static str,
    pub portion_grams: u32,
    pub portion_unit: &'static str,
    pub foods: &'static [FoodItem],
}
