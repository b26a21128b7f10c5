pub mod prompts;
pub mod render;

pub use prompts::{
    collect_profile, prompt_activity, prompt_age, prompt_goal, prompt_height, prompt_sex,
    prompt_weight, prompt_yes_no,
};
pub use render::{display_bmi, display_food_category, display_goals, display_missions, display_plan};
