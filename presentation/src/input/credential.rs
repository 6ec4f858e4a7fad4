//! Interactive API key entry

use colored::Colorize;
use forge_domain::ApiCredential;
use std::io;

/// Ask for the API key on the terminal without echoing it.
///
/// A blank entry yields `Ok(None)`; the caller decides what a missing
/// credential means.
pub fn prompt_for_api_key() -> io::Result<Option<ApiCredential>> {
    eprintln!(
        "{} {}",
        "Enter your OpenAI API key".green(),
        "(input is hidden; leave blank to cancel)".dimmed()
    );
    let input = rpassword::prompt_password("API key: ")?;
    Ok(ApiCredential::try_new(strip_controls(&input)))
}

/// Drop control characters so the key is safe to place in a header.
fn strip_controls(input: &str) -> String {
    input.chars().filter(|c| !c.is_control()).collect()
}
