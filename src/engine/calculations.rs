use log::debug;

use crate::engine::constants::*;
use crate::models::{
    BmiCategory, BmiResult, BmiThresholds, NutritionResult, PortionResult, Sex, UserProfile,
    WeightRange,
};

/// Round to the nearest integer, with halves going up (7.5 -> 8).
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to one decimal place, halves going up.
pub fn round1(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Round to a whole non-negative count.
fn to_count(value: f64) -> u32 {
    round_half_up(value).max(0.0) as u32
}

/// Basal metabolic rate in kcal/day (Mifflin-St Jeor).
///
/// `10·weight + 6.25·height − 5·age + offset`, where the offset is +5 for
/// males and −161 for females. Not rounded.
pub fn calculate_bmr(sex: Sex, weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    let base = BMR_WEIGHT_COEFFICIENT * weight_kg + BMR_HEIGHT_COEFFICIENT * height_cm
        - BMR_AGE_COEFFICIENT * age as f64;

    match sex {
        Sex::Male => base + BMR_MALE_OFFSET,
        Sex::Female => base + BMR_FEMALE_OFFSET,
    }
}

/// Total daily energy expenditure: BMR scaled by activity. Not rounded.
pub fn calculate_tdee(bmr: f64, activity_multiplier: f64) -> f64 {
    bmr * activity_multiplier
}

/// Daily calorie target and macro grams for a profile.
///
/// Every integer is rounded independently from the unrounded calorie
/// target, so results never carry rounding error from one another.
pub fn calculate_nutrition(profile: &UserProfile) -> NutritionResult {
    let bmr = calculate_bmr(profile.sex, profile.weight, profile.height, profile.age);
    let tdee = calculate_tdee(bmr, profile.activity.multiplier());
    let kcal = tdee + calorie_adjustment(profile.goal);
    let ratios = macro_ratios(profile.goal);

    debug!(
        "bmr={:.2} tdee={:.2} target={:.2} goal={}",
        bmr,
        tdee,
        kcal,
        profile.goal.id()
    );

    NutritionResult {
        target_kcal: to_count(kcal),
        protein_grams: to_count(kcal * ratios.protein / KCAL_PER_GRAM_PROTEIN),
        fat_grams: to_count(kcal * ratios.fat / KCAL_PER_GRAM_FAT),
        carb_grams: to_count(kcal * ratios.carbs / KCAL_PER_GRAM_CARBS),
        saturated_fat_grams: to_count(kcal * ratios.saturated_fat / KCAL_PER_GRAM_FAT),
    }
}

/// Convert macro grams into hand portions and water glasses.
pub fn calculate_portions(nutrition: &NutritionResult, weight_kg: f64) -> PortionResult {
    let water = to_count(weight_kg * WATER_LITRES_PER_KG * 1000.0 / WATER_ML_PER_CUP);

    PortionResult {
        protein_portions: to_count(
            nutrition.protein_grams as f64 / PROTEIN_GRAMS_PER_PALM as f64,
        ),
        carb_portions: to_count(nutrition.carb_grams as f64 / CARB_GRAMS_PER_FIST as f64),
        fat_portions: to_count(nutrition.fat_grams as f64 / FAT_GRAMS_PER_THUMB as f64),
        water_cups: water.max(WATER_MINIMUM_CUPS),
    }
}

/// Classify a (rounded) BMI value.
///
/// Each boundary belongs to the higher band: 25.0 is Overweight.
pub fn classify_bmi(value: f64) -> BmiCategory {
    if value < BMI_NORMAL_START {
        BmiCategory::Underweight
    } else if value < BMI_OVERWEIGHT_START {
        BmiCategory::NormalWeight
    } else if value < BMI_OBESE_START {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// BMI value, category and per-height weight thresholds.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> BmiResult {
    let height_m = height_cm / 100.0;
    let height_sq = height_m * height_m;

    let value = round1(weight_kg / height_sq);
    let category = classify_bmi(value);

    let thresholds = BmiThresholds {
        underweight: round1(BMI_NORMAL_START * height_sq),
        normal_end: round1(BMI_OVERWEIGHT_START * height_sq),
        obese_start: round1(BMI_OBESE_START * height_sq),
    };

    BmiResult {
        value,
        category,
        indicator: category.indicator(),
        thresholds,
        ideal_range: WeightRange {
            min: thresholds.underweight,
            max: thresholds.normal_end,
        },
    }
}
