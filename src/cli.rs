use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::error::Result;
use crate::models::UserProfile;

/// Nutrition Planner — daily calories, macros, BMI and portion missions.
#[derive(Parser, Debug)]
#[command(name = "nutrition_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate a daily plan from a profile file or flags.
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also write the plan as CSV to this path.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Answer questions and calculate interactively.
    Interactive {
        /// Save the last calculated profile to this path.
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Show BMI and healthy weight range only.
    Bmi {
        /// Weight in kg.
        #[arg(long)]
        weight: f64,

        /// Height in cm.
        #[arg(long)]
        height: f64,
    },

    /// List health goals and their advice.
    Goals,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            profile: ProfileArgs::default(),
            format: OutputFormat::Text,
            csv: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Profile inputs. A profile file takes precedence over the flags.
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// JSON profile file.
    #[arg(short, long, env = "NUTRITION_PROFILE")]
    pub profile: Option<PathBuf>,

    /// male or female.
    #[arg(long, default_value = "male")]
    pub sex: String,

    /// Age in years.
    #[arg(long, default_value = "30")]
    pub age: u32,

    /// Weight in kg.
    #[arg(long, default_value = "75")]
    pub weight: f64,

    /// Height in cm.
    #[arg(long, default_value = "175")]
    pub height: f64,

    /// sedentary, light, moderate, very, extra (or the multiplier, e.g. 1.55).
    #[arg(long, default_value = "light")]
    pub activity: String,

    /// maintain, lose, gain, sugar, cholesterol or pressure.
    #[arg(long, default_value = "maintain")]
    pub goal: String,
}

impl Default for ProfileArgs {
    fn default() -> Self {
        let defaults = UserProfile::default();
        Self {
            profile: None,
            sex: defaults.sex.id().to_string(),
            age: defaults.age,
            weight: defaults.weight,
            height: defaults.height,
            activity: defaults.activity.id().to_string(),
            goal: defaults.goal.id().to_string(),
        }
    }
}

impl ProfileArgs {
    /// Build an unvalidated profile from the flags.
    pub fn to_profile(&self) -> Result<UserProfile> {
        Ok(UserProfile::new(
            self.sex.parse()?,
            self.age,
            self.weight,
            self.height,
            self.activity.parse()?,
            self.goal.parse()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;
    use crate::models::{ActivityLevel, Goal, Sex};

    #[test]
    fn test_default_command_is_plan() {
        let cli = Cli::parse_from(["nutrition_planner"]);
        assert!(cli.command.is_none());
        assert!(matches!(Command::default(), Command::Plan { .. }));
    }

    #[test]
    fn test_plan_flags_to_profile() {
        let cli = Cli::parse_from([
            "nutrition_planner",
            "plan",
            "--sex",
            "female",
            "--age",
            "45",
            "--weight",
            "64.5",
            "--activity",
            "1.9",
            "--goal",
            "sugar",
        ]);

        let Some(Command::Plan { profile, .. }) = cli.command else {
            panic!("expected plan command");
        };
        let profile = profile.to_profile().unwrap();
        assert_eq!(profile.sex, Sex::Female);
        assert_eq!(profile.age, 45);
        assert_eq!(profile.height, 175.0);
        assert_eq!(profile.activity, ActivityLevel::ExtraActive);
        assert_eq!(profile.goal, Goal::Sugar);
    }

    #[test]
    fn test_unknown_goal_flag_is_an_error() {
        let args = ProfileArgs {
            goal: "lowcarb".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            args.to_profile(),
            Err(PlannerError::UnknownGoal { .. })
        ));
    }

    #[test]
    fn test_default_args_match_default_profile() {
        assert_eq!(
            ProfileArgs::default().to_profile().unwrap(),
            UserProfile::default()
        );
    }
}
