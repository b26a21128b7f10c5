use std::fs;
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::models::{DailyPlan, UserProfile};

/// Load a profile from a JSON file and check its ranges.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<UserProfile> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let profile: UserProfile = serde_json::from_str(&content)?;
    profile.validate()?;

    debug!("loaded profile from {}", path.display());
    Ok(profile)
}

/// Save a profile to a JSON file.
pub fn save_profile<P: AsRef<Path>>(path: P, profile: &UserProfile) -> Result<()> {
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, json)?;
    Ok(())
}

/// Serialize a plan as pretty JSON.
pub fn plan_to_json(plan: &DailyPlan) -> Result<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}

/// Write a plan as `section,item,value` rows.
pub fn write_plan_csv<P: AsRef<Path>>(path: P, plan: &DailyPlan) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    wtr.write_record(["section", "item", "value"])?;

    let n = &plan.nutrition;
    for (item, value) in [
        ("target_kcal", n.target_kcal),
        ("protein_grams", n.protein_grams),
        ("carb_grams", n.carb_grams),
        ("fat_grams", n.fat_grams),
        ("saturated_fat_grams", n.saturated_fat_grams),
    ] {
        wtr.write_record(["nutrition", item, value.to_string().as_str()])?;
    }

    let p = &plan.portions;
    for (item, value) in [
        ("protein_portions", p.protein_portions),
        ("carb_portions", p.carb_portions),
        ("fat_portions", p.fat_portions),
        ("water_cups", p.water_cups),
    ] {
        wtr.write_record(["portions", item, value.to_string().as_str()])?;
    }

    let bmi = &plan.bmi;
    for (item, value) in [
        ("value", format!("{:.1}", bmi.value)),
        ("category", bmi.category.display_name().to_string()),
        ("ideal_min_kg", format!("{:.1}", bmi.ideal_range.min)),
        ("ideal_max_kg", format!("{:.1}", bmi.ideal_range.max)),
    ] {
        wtr.write_record(["bmi", item, value.as_str()])?;
    }

    wtr.write_record(["advice", plan.goal_info.label, plan.goal_info.text])?;

    for mission in &plan.missions {
        wtr.write_record([
            "mission",
            mission.title.as_str(),
            mission.description.as_str(),
        ])?;
    }

    wtr.flush()?;
    debug!("wrote {} missions to csv", plan.missions.len());
    Ok(())
}
