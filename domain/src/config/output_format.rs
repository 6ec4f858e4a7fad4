//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for a generation run
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// All labeled sections: description, criteria, questions, solutions (default)
    #[default]
    Full,
    /// Only the generated questions and their solutions
    Questions,
    /// JSON output
    Json,
}
