pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{PlannerError, Result};
pub use models::{DailyPlan, Goal, UserProfile};
