use serde::Serialize;

use crate::models::profile::UserProfile;
use crate::models::results::{
    BmiResult, FoodCategory, GoalInfo, Mission, NutritionResult, PortionResult,
};

/// The complete result set of one calculation.
///
/// Built in one pass from a profile and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    pub profile: UserProfile,
    pub nutrition: NutritionResult,
    pub portions: PortionResult,
    pub bmi: BmiResult,
    pub goal_info: GoalInfo,
    /// Base missions first, then any goal-specific ones.
    pub missions: Vec<Mission>,
    pub food_guide: Vec<FoodCategory>,
}
