use crate::engine::goal_info;
use crate::models::{BmiResult, DailyPlan, FoodCategory, Goal, Indicator, Mission};

fn indicator_mark(indicator: Indicator) -> &'static str {
    match indicator {
        Indicator::Healthy => "[ok]",
        Indicator::Caution => "[!]",
        Indicator::Alert => "[!!]",
    }
}

/// Display the BMI card.
pub fn display_bmi(bmi: &BmiResult) {
    println!(
        "BMI: {:.1} {} {}",
        bmi.value,
        bmi.category,
        indicator_mark(bmi.indicator)
    );
    println!(
        "Healthy weight for your height: {:.1} - {:.1} kg (obese from {:.1} kg)",
        bmi.ideal_range.min, bmi.ideal_range.max, bmi.thresholds.obese_start
    );
}

/// Display the mission list.
pub fn display_missions(missions: &[Mission]) {
    println!("--- Your Daily Missions ---");
    for mission in missions {
        println!("  {} {}", mission.icon, mission.title);
        println!("     {}", mission.description);
    }
}

/// Display one food guide section.
pub fn display_food_category(category: &FoodCategory) {
    println!();
    println!(
        "{} ({}: {}/day, ~{}g of {} per portion)",
        category.title,
        category.target_label,
        category.target,
        category.portion_grams,
        category.portion_unit
    );

    let width = category
        .foods
        .iter()
        .map(|f| f.name.len())
        .max()
        .unwrap_or(10);

    for food in category.foods {
        println!("  {:<width$}  {}", food.name, food.amount, width = width);
    }
}

/// Display a complete plan.
pub fn display_plan(plan: &DailyPlan) {
    let n = &plan.nutrition;

    println!();
    println!("=== Your Personalized Plan ===");
    println!();
    println!("Daily target: {} kcal", n.target_kcal);
    display_bmi(&plan.bmi);
    println!();
    println!("Protein:       {:>4} g  (daily target)", n.protein_grams);
    println!("Carbs:         {:>4} g  (daily target)", n.carb_grams);
    println!("Fats:          {:>4} g  (daily target)", n.fat_grams);
    println!("Saturated Fat: {:>4} g  (maximum)", n.saturated_fat_grams);
    println!();
    println!("{}: {}", plan.goal_info.label, plan.goal_info.text);
    println!();
    display_missions(&plan.missions);
    println!();
    println!("--- Food Guide ---");
    for category in &plan.food_guide {
        display_food_category(category);
    }
    println!();
}

/// Display every goal with its advice.
pub fn display_goals() {
    for goal in Goal::all() {
        let info = goal_info(*goal);
        println!("{:<12} {}", goal.id(), goal.display_name());
        println!("             {}: {}", info.label, info.text);
    }
}
