pub mod plan;
pub mod profile;
pub mod results;

pub use plan::DailyPlan;
pub use profile::{ActivityLevel, Goal, Sex, UserProfile};
pub use results::{
    BmiCategory, BmiResult, BmiThresholds, FoodCategory, FoodItem, GoalInfo, Indicator, Mission,
    NutritionResult, PortionResult, WeightRange,
};
