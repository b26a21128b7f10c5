mod persistence;
mod session;

pub use persistence::{load_profile, plan_to_json, save_profile, write_plan_csv};
pub use session::CalculatorSession;
