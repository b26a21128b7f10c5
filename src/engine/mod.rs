pub mod advice;
pub mod calculations;
pub mod constants;
pub mod plan;

pub use advice::{
    base_missions, daily_missions, food_guide, goal_extra_missions, goal_info, goal_info_by_name,
};
pub use calculations::{
    calculate_bmi, calculate_bmr, calculate_nutrition, calculate_portions, calculate_tdee,
    classify_bmi, round1, round_half_up,
};
pub use constants::*;
pub use plan::build_plan;
