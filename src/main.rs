use std::path::{Path, PathBuf};

use clap::Parser;
use log::{info, warn};

use nutrition_planner::cli::{Cli, Command, OutputFormat, ProfileArgs};
use nutrition_planner::engine::{build_plan, calculate_bmi};
use nutrition_planner::error::{PlannerError, Result};
use nutrition_planner::interface::{
    collect_profile, display_bmi, display_goals, display_plan, prompt_yes_no,
};
use nutrition_planner::models::UserProfile;
use nutrition_planner::state::{
    CalculatorSession, load_profile, plan_to_json, save_profile, write_plan_csv,
};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            profile,
            format,
            csv,
        } => cmd_plan(&profile, format, csv.as_deref()),
        Command::Interactive { save } => cmd_interactive(save),
        Command::Bmi { weight, height } => cmd_bmi(weight, height),
        Command::Goals => {
            display_goals();
            Ok(())
        }
    }
}

/// Calculate and print a plan.
fn cmd_plan(args: &ProfileArgs, format: OutputFormat, csv: Option<&Path>) -> Result<()> {
    let profile = match &args.profile {
        Some(path) => {
            info!("reading profile from {}", path.display());
            load_profile(path)?
        }
        None => {
            let profile = args.to_profile()?;
            profile.validate()?;
            profile
        }
    };

    let plan = build_plan(&profile);

    match format {
        OutputFormat::Text => display_plan(&plan),
        OutputFormat::Json => println!("{}", plan_to_json(&plan)?),
    }

    if let Some(path) = csv {
        write_plan_csv(path, &plan)?;
        eprintln!("Plan written to {}", path.display());
    }

    Ok(())
}

/// Prompt, calculate and display until the user stops.
fn cmd_interactive(save: Option<PathBuf>) -> Result<()> {
    let mut session = CalculatorSession::new();
    let mut defaults = UserProfile::default();

    println!("Personal Nutrition Calculator");
    println!();

    loop {
        let profile = match collect_profile(&defaults) {
            Ok(profile) => profile,
            Err(PlannerError::InvalidProfile(msg)) => {
                println!("Invalid input: {}", msg);
                continue;
            }
            Err(e) => return Err(e),
        };

        match session.calculate(profile.clone()) {
            Ok(plan) => display_plan(plan),
            Err(PlannerError::InvalidProfile(msg)) => {
                warn!("rejected profile: {}", msg);
                println!("Invalid input: {}", msg);
            }
            Err(e) => return Err(e),
        }

        defaults = profile;

        if !prompt_yes_no("Calculate again?", false)? {
            break;
        }
    }

    if let (Some(path), Some(plan)) = (save, session.result()) {
        save_profile(&path, &plan.profile)?;
        println!("Profile saved to {}", path.display());
    }

    Ok(())
}

/// Print the BMI card for a weight and height.
fn cmd_bmi(weight: f64, height: f64) -> Result<()> {
    let check = UserProfile {
        weight,
        height,
        ..Default::default()
    };
    check.validate()?;

    display_bmi(&calculate_bmi(weight, height));
    Ok(())
}
