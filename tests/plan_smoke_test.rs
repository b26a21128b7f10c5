use nutrition_planner::engine::build_plan;
use nutrition_planner::models::{ActivityLevel, Goal, Sex, UserProfile};
use nutrition_planner::state::{CalculatorSession, load_profile, save_profile, write_plan_csv};
use tempfile::NamedTempFile;

fn profiles() -> Vec<UserProfile> {
    let mut out = Vec::new();
    for sex in Sex::all() {
        for activity in ActivityLevel::all() {
            for goal in Goal::all() {
                out.push(UserProfile::new(*sex, 40, 70.0, 170.0, *activity, *goal));
            }
        }
    }
    out
}

#[test]
fn test_every_combination_builds_a_consistent_plan() {
    for profile in profiles() {
        let plan = build_plan(&profile);

        assert!(plan.nutrition.target_kcal > 0);
        assert!(plan.nutrition.saturated_fat_grams < plan.nutrition.fat_grams);
        assert!(plan.portions.water_cups >= 8);

        let expected_missions = match profile.goal {
            Goal::Sugar | Goal::Cholesterol => 6,
            _ => 5,
        };
        assert_eq!(plan.missions.len(), expected_missions);
        assert_eq!(plan.food_guide.len(), 3);
        assert_eq!(plan.food_guide[1].target, plan.portions.carb_portions);
    }
}

#[test]
fn test_macros_roughly_account_for_target() {
    for profile in profiles() {
        let n = build_plan(&profile).nutrition;
        let kcal = n.protein_grams as f64 * 4.0 + n.carb_grams as f64 * 4.0 + n.fat_grams as f64 * 9.0;
        // each gram value is off by at most half a gram
        assert!((kcal - n.target_kcal as f64).abs() <= 10.0, "{:?}", profile);
    }
}

#[test]
fn test_session_with_saved_profile() {
    let profile = UserProfile::new(
        Sex::Female,
        52,
        81.0,
        162.0,
        ActivityLevel::Sedentary,
        Goal::Pressure,
    );

    let file = NamedTempFile::new().unwrap();
    save_profile(file.path(), &profile).unwrap();
    let loaded = load_profile(file.path()).unwrap();

    let mut session = CalculatorSession::new();
    let plan = session.calculate(loaded).unwrap().clone();
    assert_eq!(plan, build_plan(&profile));
    assert_eq!(plan.goal_info.label, "DASH Principle");

    let csv_file = NamedTempFile::new().unwrap();
    write_plan_csv(csv_file.path(), &plan).unwrap();
    let content = std::fs::read_to_string(csv_file.path()).unwrap();
    assert!(content.starts_with("section,item,value"));
    assert!(content.contains("Drink"));
}
