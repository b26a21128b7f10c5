use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Unknown goal '{value}'{}", suggestion_suffix(.suggestion))]
    UnknownGoal {
        value: String,
        suggestion: Option<String>,
    },

    #[error("Unknown activity level '{value}'{}", suggestion_suffix(.suggestion))]
    UnknownActivity {
        value: String,
        suggestion: Option<String>,
    },

    #[error("Unknown sex '{value}'{}", suggestion_suffix(.suggestion))]
    UnknownSex {
        value: String,
        suggestion: Option<String>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
