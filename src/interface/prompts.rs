use dialoguer::{Confirm, Input, Select};

use crate::engine::constants::{AGE_RANGE, HEIGHT_RANGE_CM, WEIGHT_RANGE_KG};
use crate::error::{PlannerError, Result};
use crate::models::{ActivityLevel, Goal, Sex, UserProfile};

/// Prompt for sex.
pub fn prompt_sex(default: Sex) -> Result<Sex> {
    let options: Vec<&str> = Sex::all().iter().map(|s| s.display_name()).collect();
    let default_idx = Sex::all().iter().position(|s| *s == default).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Sex")
        .items(&options)
        .default(default_idx)
        .interact()?;

    Ok(Sex::all()[selection])
}

/// Prompt for age in years.
pub fn prompt_age(default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Age (years, {}-{})",
            AGE_RANGE.start(),
            AGE_RANGE.end()
        ))
        .default(default.to_string())
        .interact_text()?;

    let age: u32 = input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidProfile(format!("'{}' is not a valid age", input)))?;

    if !AGE_RANGE.contains(&age) {
        return Err(PlannerError::InvalidProfile(format!(
            "age must be between {} and {} years",
            AGE_RANGE.start(),
            AGE_RANGE.end()
        )));
    }

    Ok(age)
}

/// Prompt for a number within an inclusive range.
fn prompt_measure(prompt: &str, default: f64, min: f64, max: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("{} ({}-{})", prompt, min, max))
        .default(default.to_string())
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidProfile(format!("'{}' is not a number", input)))?;

    if !value.is_finite() || value < min || value > max {
        return Err(PlannerError::InvalidProfile(format!(
            "{} must be between {} and {}",
            prompt, min, max
        )));
    }

    Ok(value)
}

/// Prompt for weight in kilograms.
pub fn prompt_weight(default: f64) -> Result<f64> {
    prompt_measure(
        "Weight (kg)",
        default,
        *WEIGHT_RANGE_KG.start(),
        *WEIGHT_RANGE_KG.end(),
    )
}

/// Prompt for height in centimetres.
pub fn prompt_height(default: f64) -> Result<f64> {
    prompt_measure(
        "Height (cm)",
        default,
        *HEIGHT_RANGE_CM.start(),
        *HEIGHT_RANGE_CM.end(),
    )
}

/// Prompt for activity level.
pub fn prompt_activity(default: ActivityLevel) -> Result<ActivityLevel> {
    let options: Vec<&str> = ActivityLevel::all()
        .iter()
        .map(|a| a.display_name())
        .collect();
    let default_idx = ActivityLevel::all()
        .iter()
        .position(|a| *a == default)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Activity Level")
        .items(&options)
        .default(default_idx)
        .interact()?;

    Ok(ActivityLevel::all()[selection])
}

/// Prompt for health goal.
pub fn prompt_goal(default: Goal) -> Result<Goal> {
    let options: Vec<&str> = Goal::all().iter().map(|g| g.display_name()).collect();
    let default_idx = Goal::all().iter().position(|g| *g == default).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Health Goal")
        .items(&options)
        .default(default_idx)
        .interact()?;

    Ok(Goal::all()[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full profile, offering `defaults` as the initial answers.
pub fn collect_profile(defaults: &UserProfile) -> Result<UserProfile> {
    let sex = prompt_sex(defaults.sex)?;
    let age = prompt_age(defaults.age)?;
    let weight = prompt_weight(defaults.weight)?;
    let height = prompt_height(defaults.height)?;
    let activity = prompt_activity(defaults.activity)?;
    let goal = prompt_goal(defaults.goal)?;

    Ok(UserProfile::new(sex, age, weight, height, activity, goal))
}
