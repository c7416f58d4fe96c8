use bincare_core::RateBook;

use super::CommandResult;

/// Print the effective rate book so operators can confirm the constants a
/// running engine prices against.
pub fn run() -> CommandResult {
    match serde_json::to_string_pretty(&RateBook::default()) {
        Ok(output) => CommandResult { exit_code: 0, output },
        Err(error) => CommandResult::failure("rates", "serialization", error.to_string(), 3),
    }
}
