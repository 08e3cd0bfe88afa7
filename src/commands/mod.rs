//! Command implementations

pub mod check;
pub mod hints;
pub mod play;
pub mod survey;

pub use check::{CheckResult, check_word};
pub use hints::{HintsResult, find_hints, find_playable};
pub use play::run_play;
pub use survey::{RootSurvey, SurveyStatistics, print_survey_statistics, run_survey};
