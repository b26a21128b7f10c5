use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

use crate::models::{FoodItem, Goal, GoalInfo};

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor BMR coefficients
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_WEIGHT_COEFFICIENT: f64 = 10.0;
pub const BMR_HEIGHT_COEFFICIENT: f64 = 6.25;
pub const BMR_AGE_COEFFICIENT: f64 = 5.0;
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Energy density (kcal per gram)
// ─────────────────────────────────────────────────────────────────────────────

pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Hand portions (grams of macro per portion)
// ─────────────────────────────────────────────────────────────────────────────

pub const PROTEIN_GRAMS_PER_PALM: u32 = 25;
pub const CARB_GRAMS_PER_FIST: u32 = 40;
pub const FAT_GRAMS_PER_THUMB: u32 = 12;

// ─────────────────────────────────────────────────────────────────────────────
// Water
// ─────────────────────────────────────────────────────────────────────────────

/// Litres of water per kg of body weight.
pub const WATER_LITRES_PER_KG: f64 = 0.033;
pub const WATER_ML_PER_CUP: f64 = 250.0;
pub const WATER_MINIMUM_CUPS: u32 = 8;

/// Servings of vegetables recommended per day (80 g each).
pub const VEGETABLE_SERVINGS: u32 = 5;
pub const VEGETABLE_SERVING_GRAMS: u32 = 80;

// ─────────────────────────────────────────────────────────────────────────────
// BMI band boundaries (WHO)
// ─────────────────────────────────────────────────────────────────────────────

pub const BMI_NORMAL_START: f64 = 18.5;
pub const BMI_OVERWEIGHT_START: f64 = 25.0;
pub const BMI_OBESE_START: f64 = 30.0;

// ─────────────────────────────────────────────────────────────────────────────
// Accepted profile input ranges
// ─────────────────────────────────────────────────────────────────────────────

pub const AGE_RANGE: RangeInclusive<u32> = 15..=100;
pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 30.0..=300.0;
pub const HEIGHT_RANGE_CM: RangeInclusive<f64> = 100.0..=250.0;

/// Share of daily energy per macronutrient.
///
/// `protein + fat + carbs == 1.0`; `saturated_fat` is a cap inside `fat`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroRatios {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub saturated_fat: f64,
}

const STANDARD_RATIOS: MacroRatios = MacroRatios {
    protein: 0.25,
    fat: 0.25,
    carbs: 0.5,
    saturated_fat: 0.1,
};

/// Daily kcal adjustment applied to TDEE for each goal.
pub static CALORIE_ADJUSTMENTS: LazyLock<HashMap<Goal, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(Goal::Maintain, 0.0);
    m.insert(Goal::Lose, -500.0);
    m.insert(Goal::Gain, 500.0);
    m.insert(Goal::Sugar, -200.0);
    m.insert(Goal::Cholesterol, -200.0);
    m.insert(Goal::Pressure, -200.0);
    m
});

pub static MACRO_RATIOS: LazyLock<HashMap<Goal, MacroRatios>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(Goal::Maintain, STANDARD_RATIOS);
    m.insert(Goal::Lose, STANDARD_RATIOS);
    m.insert(Goal::Gain, STANDARD_RATIOS);
    m.insert(
        Goal::Sugar,
        MacroRatios {
            protein: 0.3,
            fat: 0.35,
            carbs: 0.35,
            saturated_fat: 0.08,
        },
    );
    m.insert(
        Goal::Cholesterol,
        MacroRatios {
            saturated_fat: 0.06,
            ..STANDARD_RATIOS
        },
    );
    m.insert(
        Goal::Pressure,
        MacroRatios {
            protein: 0.2,
            fat: 0.3,
            carbs: 0.5,
            saturated_fat: 0.07,
        },
    );
    m
});

/// General advice for goals without a specific health focus.
pub const WELLNESS_INFO: GoalInfo = GoalInfo {
    label: "Wellness Recommendation",
    text: "Drink at least 2L of water daily and aim for 5 servings of vegetables as per UK NHS guidelines.",
};

pub static GOAL_INFO: LazyLock<HashMap<Goal, GoalInfo>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(Goal::Maintain, WELLNESS_INFO);
    m.insert(Goal::Lose, WELLNESS_INFO);
    m.insert(Goal::Gain, WELLNESS_INFO);
    m.insert(
        Goal::Sugar,
        GoalInfo {
            label: "Health Tip",
            text: "Focus on Low Glycemic Index (GI) carbs like legumes, oats, and leafy greens. Avoid simple sugars and refined white flour.",
        },
    );
    m.insert(
        Goal::Cholesterol,
        GoalInfo {
            label: "Heart Health",
            text: "Limit saturated fats (butter, fatty meats) to <6% of total kcal. Increase soluble fiber (beans, apples) to lower LDL.",
        },
    );
    m.insert(
        Goal::Pressure,
        GoalInfo {
            label: "DASH Principle",
            text: "Prioritize high-potassium foods (bananas, potatoes, spinach) and magnesium. Keep sodium below 1,500mg daily.",
        },
    );
    m
});

pub static PROTEIN_FOODS: &[FoodItem] = &[
    FoodItem { name: "Chicken Breast", amount: "100g raw / 1 small breast" },
    FoodItem { name: "Tofu / Tempeh", amount: "150g block" },
    FoodItem { name: "White Fish", amount: "120g raw fillet" },
    FoodItem { name: "Eggs", amount: "2 large eggs (whole)" },
    FoodItem { name: "Greek Yogurt", amount: "200g (small tub)" },
    FoodItem { name: "Lean Beef", amount: "100g raw mince" },
    FoodItem { name: "Protein Powder", amount: "1 scoop (30g)" },
];

pub static CARB_FOODS: &[FoodItem] = &[
    FoodItem { name: "Rice (White/Brown)", amount: "40g dry / 120g cooked" },
    FoodItem { name: "Pasta", amount: "50g dry / 1 cup cooked" },
    FoodItem { name: "Rolled Oats", amount: "40g dry" },
    FoodItem { name: "Potato", amount: "1 med. (150g)" },
    FoodItem { name: "Sweet Potato", amount: "1 med. (150g)" },
    FoodItem { name: "Bread (Wholegrain)", amount: "2 slices" },
    FoodItem { name: "Banana", amount: "1 large" },
];

pub static FAT_FOODS: &[FoodItem] = &[
    FoodItem { name: "Avocado", amount: "1/2 medium" },
    FoodItem { name: "Nuts (Original)", amount: "20g (small handful)" },
    FoodItem { name: "Olive Oil", amount: "1 tbsp" },
    FoodItem { name: "Butter", amount: "10g (pat)" },
    FoodItem { name: "Chia Seeds", amount: "2 tbsp" },
    FoodItem { name: "Cheese", amount: "30g (matchbox)" },
    FoodItem { name: "Peanut Butter", amount: "1 heaped tsp" },
];

/// Calorie adjustment for a goal.
pub fn calorie_adjustment(goal: Goal) -> f64 {
    CALORIE_ADJUSTMENTS.get(&goal).copied().unwrap_or(0.0)
}

/// Macro ratios for a goal, falling back to the standard split.
pub fn macro_ratios(goal: Goal) -> MacroRatios {
    MACRO_RATIOS.get(&goal).copied().unwrap_or(STANDARD_RATIOS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_goal_has_table_entries() {
        for goal in Goal::all() {
            assert!(CALORIE_ADJUSTMENTS.contains_key(goal));
            assert!(MACRO_RATIOS.contains_key(goal));
            assert!(GOAL_INFO.contains_key(goal));
        }
    }

    #[test]
    fn test_primary_macros_sum_to_one() {
        for goal in Goal::all() {
            let r = macro_ratios(*goal);
            assert!((r.protein + r.fat + r.carbs - 1.0).abs() < 1e-9, "{:?}", goal);
            assert!(r.saturated_fat < r.fat);
        }
    }

    #[test]
    fn test_food_lists_have_seven_items() {
        assert_eq!(PROTEIN_FOODS.len(), 7);
        assert_eq!(CARB_FOODS.len(), 7);
        assert_eq!(FAT_FOODS.len(), 7);
    }
}
