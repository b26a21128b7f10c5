use assert_float_eq::*;

use nutrition_planner::engine::{
    calculate_bmi, calculate_bmr, calculate_nutrition, calculate_portions, calculate_tdee,
    goal_extra_missions, goal_info, goal_info_by_name,
};
use nutrition_planner::models::{
    ActivityLevel, BmiCategory, Goal, NutritionResult, Sex, UserProfile,
};

fn base_profile(goal: Goal) -> UserProfile {
    UserProfile::new(
        Sex::Male,
        30,
        75.0,
        175.0,
        ActivityLevel::ModeratelyActive,
        goal,
    )
}

fn sample_nutrition() -> NutritionResult {
    NutritionResult {
        target_kcal: 2500,
        protein_grams: 150,
        fat_grams: 70,
        carb_grams: 300,
        saturated_fat_grams: 28,
    }
}

#[test]
fn test_bmr_sex_offset() {
    for (w, h, a) in [(75.0, 175.0, 30), (52.3, 158.0, 61), (120.0, 201.5, 18)] {
        let diff = calculate_bmr(Sex::Male, w, h, a) - calculate_bmr(Sex::Female, w, h, a);
        assert_float_absolute_eq!(diff, 166.0, 1e-9);
    }
}

#[test]
fn test_bmr_age_and_weight_coefficients() {
    let young = calculate_bmr(Sex::Male, 75.0, 175.0, 25);
    let old = calculate_bmr(Sex::Male, 75.0, 175.0, 55);
    assert_float_absolute_eq!(young - old, 150.0, 1e-9);

    let light = calculate_bmr(Sex::Female, 60.0, 175.0, 30);
    let heavy = calculate_bmr(Sex::Female, 90.0, 175.0, 30);
    assert_float_absolute_eq!(heavy - light, 300.0, 1e-9);
}

#[test]
fn test_tdee() {
    assert_float_absolute_eq!(calculate_tdee(1780.0, 1.2), 2136.0, 1e-6);
    assert_float_absolute_eq!(calculate_tdee(1780.0, 1.725), 3070.5, 1e-6);

    for level in ActivityLevel::all() {
        assert!(calculate_tdee(1500.0, level.multiplier()) > 1500.0);
    }
}

#[test]
fn test_goal_calorie_adjustments() {
    let maintain = calculate_nutrition(&base_profile(Goal::Maintain));
    let lose = calculate_nutrition(&base_profile(Goal::Lose));
    let gain = calculate_nutrition(&base_profile(Goal::Gain));

    assert_eq!(maintain.target_kcal - lose.target_kcal, 500);
    assert_eq!(gain.target_kcal - maintain.target_kcal, 500);
}

#[test]
fn test_goal_macro_shifts() {
    let maintain = calculate_nutrition(&base_profile(Goal::Maintain));
    let chol = calculate_nutrition(&base_profile(Goal::Cholesterol));
    let sugar = calculate_nutrition(&base_profile(Goal::Sugar));

    assert!(chol.saturated_fat_grams < maintain.saturated_fat_grams);

    let maintain_ratio = maintain.protein_grams as f64 / maintain.target_kcal as f64;
    let sugar_ratio = sugar.protein_grams as f64 / sugar.target_kcal as f64;
    assert!(sugar_ratio > maintain_ratio);
}

#[test]
fn test_portions_round_half_up() {
    let portions = calculate_portions(&sample_nutrition(), 75.0);
    assert_eq!(portions.protein_portions, 6);
    assert_eq!(portions.carb_portions, 8); // 7.5
    assert_eq!(portions.fat_portions, 6); // 5.83
    assert_eq!(portions.water_cups, 10); // 9.9
}

#[test]
fn test_water_minimum() {
    let portions = calculate_portions(&sample_nutrition(), 30.0);
    assert_eq!(portions.water_cups, 8);
}

#[test]
fn test_bmi_categories() {
    let normal = calculate_bmi(70.0, 175.0);
    assert_float_absolute_eq!(normal.value, 22.9, 1e-9);
    assert_eq!(normal.category, BmiCategory::NormalWeight);
    assert_eq!(normal.category.display_name(), "Normal weight");

    let under = calculate_bmi(45.0, 175.0);
    assert_float_absolute_eq!(under.value, 14.7, 1e-9);
    assert_eq!(under.category, BmiCategory::Underweight);

    let over = calculate_bmi(85.0, 170.0);
    assert_float_absolute_eq!(over.value, 29.4, 1e-9);
    assert_eq!(over.category, BmiCategory::Overweight);

    let obese = calculate_bmi(110.0, 175.0);
    assert_float_absolute_eq!(obese.value, 35.9, 1e-9);
    assert_eq!(obese.category, BmiCategory::Obese);
}

#[test]
fn test_bmi_boundaries() {
    let at_25 = calculate_bmi(81.0, 180.0);
    assert_float_absolute_eq!(at_25.value, 25.0, 1e-9);
    assert_eq!(at_25.category, BmiCategory::Overweight);

    // 18.488 rounds to 18.5
    let at_18_5 = calculate_bmi(59.9, 180.0);
    assert_float_absolute_eq!(at_18_5.value, 18.5, 1e-9);
    assert_eq!(at_18_5.category, BmiCategory::NormalWeight);
}

#[test]
fn test_bmi_thresholds_and_ideal_range() {
    let bmi = calculate_bmi(70.0, 175.0);
    assert_float_absolute_eq!(bmi.thresholds.underweight, 56.7, 1e-9);
    assert_float_absolute_eq!(bmi.thresholds.obese_start, 91.9, 0.05);
    assert_eq!(bmi.ideal_range.min, bmi.thresholds.underweight);
    assert_eq!(bmi.ideal_range.max, bmi.thresholds.normal_end);

    for height in [100.0, 150.0, 175.0, 199.5, 250.0] {
        let range = calculate_bmi(70.0, height).ideal_range;
        assert!(range.min < range.max, "height {}", height);
    }
}

#[test]
fn test_goal_info() {
    for goal in Goal::all() {
        let info = goal_info(*goal);
        assert!(!info.label.is_empty());
        assert!(!info.text.is_empty());
    }

    assert!(goal_info(Goal::Sugar).text.contains("Low Glycemic Index"));
    assert_eq!(goal_info(Goal::Pressure).label, "DASH Principle");
    assert!(goal_info(Goal::Pressure).text.contains("potassium"));
    assert_eq!(goal_info_by_name("invalid"), goal_info(Goal::Maintain));
}

#[test]
fn test_goal_extra_missions() {
    let sugar = goal_extra_missions(Goal::Sugar);
    assert_eq!(sugar.len(), 1);
    assert_eq!(sugar[0].title, "No sugary drinks");
    assert!(!sugar[0].icon.is_empty());
    assert!(!sugar[0].accessible_label.is_empty());
    assert!(!sugar[0].description.is_empty());

    let chol = goal_extra_missions(Goal::Cholesterol);
    assert_eq!(chol.len(), 1);
    assert!(chol[0].title.contains("Oily Fish"));

    for goal in [Goal::Maintain, Goal::Lose, Goal::Gain, Goal::Pressure] {
        assert!(goal_extra_missions(goal).is_empty());
    }
}
