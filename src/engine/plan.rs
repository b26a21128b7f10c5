use log::debug;

use crate::engine::advice::{daily_missions, food_guide, goal_info};
use crate::engine::calculations::{calculate_bmi, calculate_nutrition, calculate_portions};
use crate::models::{DailyPlan, UserProfile};

/// Run the whole calculation chain for one profile.
///
/// The profile is not validated here; see [`UserProfile::validate`].
pub fn build_plan(profile: &UserProfile) -> DailyPlan {
    let nutrition = calculate_nutrition(profile);
    let portions = calculate_portions(&nutrition, profile.weight);
    let bmi = calculate_bmi(profile.weight, profile.height);

    debug!(
        "plan: {} kcal, bmi {} ({}), {} glasses",
        nutrition.target_kcal,
        bmi.value,
        bmi.category,
        portions.water_cups
    );

    DailyPlan {
        profile: profile.clone(),
        nutrition,
        portions,
        bmi,
        goal_info: goal_info(profile.goal).clone(),
        missions: daily_missions(&portions, profile.goal),
        food_guide: food_guide(&portions),
    }
}
