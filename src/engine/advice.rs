use crate::engine::constants::*;
use crate::models::{FoodCategory, Goal, GoalInfo, Mission, PortionResult};

/// Advice for a goal. Goals without an entry get the maintain advice.
pub fn goal_info(goal: Goal) -> &'static GoalInfo {
    GOAL_INFO
        .get(&goal)
        .or_else(|| GOAL_INFO.get(&Goal::Maintain))
        .unwrap_or(&WELLNESS_INFO)
}

/// Advice for a goal identifier. Unrecognised names fall back to maintain.
pub fn goal_info_by_name(name: &str) -> &'static GoalInfo {
    goal_info(name.parse().unwrap_or_default())
}

/// Bonus missions that only apply to some goals.
pub fn goal_extra_missions(goal: Goal) -> Vec<Mission> {
    match goal {
        Goal::Sugar => vec![Mission::new(
            "🚫",
            "No sugary drinks",
            "No sugary drinks",
            "0g added sugar from beverages.",
        )],
        Goal::Cholesterol => vec![Mission::new(
            "🐟",
            "Oily fish",
            "Eat Oily Fish x2/week",
            "Salmon/Mackerel for Omega-3.",
        )],
        Goal::Maintain | Goal::Lose | Goal::Gain | Goal::Pressure => Vec::new(),
    }
}

/// The five missions every plan gets, worded from the portion counts.
pub fn base_missions(portions: &PortionResult) -> Vec<Mission> {
    vec![
        Mission::new(
            "🥩",
            "Protein",
            format!("Eat {} Palms of Protein", portions.protein_portions),
            format!(
                "~{}g each (Chicken breast, Tofu block)",
                PROTEIN_GRAMS_PER_PALM
            ),
        ),
        Mission::new(
            "🍚",
            "Carbs",
            format!("Eat {} Fists of Carbs", portions.carb_portions),
            format!("~{}g each (Rice, Potato, Oats)", CARB_GRAMS_PER_FIST),
        ),
        Mission::new(
            "🥑",
            "Fats",
            format!("Limit to {} Thumbs of Fat", portions.fat_portions),
            format!("~{}g each (Oils, Nuts, Butter)", FAT_GRAMS_PER_THUMB),
        ),
        Mission::new(
            "🥬",
            "Vegetables",
            format!("Eat {}+ Vegetable Servings", VEGETABLE_SERVINGS),
            format!("{}g is one serving (1 handful)", VEGETABLE_SERVING_GRAMS),
        ),
        Mission::new(
            "💧",
            "Water",
            format!("Drink {} Glasses", portions.water_cups),
            format!("~{}ml per glass. Stay hydrated!", WATER_ML_PER_CUP),
        ),
    ]
}

/// Base missions followed by the goal's bonus missions.
pub fn daily_missions(portions: &PortionResult, goal: Goal) -> Vec<Mission> {
    let mut missions = base_missions(portions);
    missions.extend(goal_extra_missions(goal));
    missions
}

/// Food guide sections with their daily portion targets.
pub fn food_guide(portions: &PortionResult) -> Vec<FoodCategory> {
    vec![
        FoodCategory {
            title: "Proteins",
            target: portions.protein_portions,
            target_label: "Target",
            portion_grams: PROTEIN_GRAMS_PER_PALM,
            portion_unit: "protein",
            foods: PROTEIN_FOODS,
        },
        FoodCategory {
            title: "Carbs",
            target: portions.carb_portions,
            target_label: "Target",
            portion_grams: CARB_GRAMS_PER_FIST,
            portion_unit: "carbs",
            foods: CARB_FOODS,
        },
        FoodCategory {
            title: "Fats",
            target: portions.fat_portions,
            target_label: "Limit",
            portion_grams: FAT_GRAMS_PER_THUMB,
            portion_unit: "fat",
            foods: FAT_FOODS,
        },
    ]
}
