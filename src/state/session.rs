use log::info;

use crate::engine::build_plan;
use crate::error::Result;
use crate::models::{DailyPlan, UserProfile};

/// Holds the result of the latest calculation, if any.
///
/// Each successful [`calculate`](Self::calculate) replaces the whole plan.
#[derive(Debug, Default)]
pub struct CalculatorSession {
    result: Option<DailyPlan>,
}

impl CalculatorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the profile and replace the current result with a fresh plan.
    ///
    /// On a validation error the previous result is kept.
    pub fn calculate(&mut self, profile: UserProfile) -> Result<&DailyPlan> {
        profile.validate()?;

        let plan = build_plan(&profile);
        info!(
            "calculated plan: {} kcal for goal '{}'",
            plan.nutrition.target_kcal,
            profile.goal.id()
        );

        Ok(&*self.result.insert(plan))
    }

    /// The current plan, if a calculation has succeeded.
    pub fn result(&self) -> Option<&DailyPlan> {
        self.result.as_ref()
    }

    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    /// Drop the current plan.
    pub fn clear(&mut self) {
        self.result = None;
    }
}
