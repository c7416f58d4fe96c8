use std::fs;
use std::io::Read;
use std::path::Path;

use bincare_core::{calculate_quote, QuoteParams, QuoteRequest, RateBook};

use super::CommandResult;

/// Price one service request from a JSON payload (file path or `-` for
/// stdin) and print the full quote result.
pub fn run(file: &Path) -> CommandResult {
    let raw = match read_input(file) {
        Ok(raw) => raw,
        Err(error) => {
            return CommandResult::failure(
                "quote",
                "read_input",
                format!("could not read request payload: {error}"),
                2,
            )
        }
    };

    let params: QuoteParams = match serde_json::from_str(&raw) {
        Ok(params) => params,
        Err(error) => {
            return CommandResult::failure(
                "quote",
                "invalid_request",
                format!("request payload is not a valid quote request: {error}"),
                2,
            )
        }
    };

    let result = calculate_quote(&RateBook::default(), &QuoteRequest::from(params));

    match serde_json::to_string_pretty(&result) {
        Ok(output) => CommandResult { exit_code: 0, output },
        Err(error) => CommandResult::failure("quote", "serialization", error.to_string(), 3),
    }
}

fn read_input(file: &Path) -> std::io::Result<String> {
    if file == Path::new("-") {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        Ok(raw)
    } else {
        fs::read_to_string(file)
    }
}
