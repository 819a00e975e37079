//! Bet input validation for hosts

use gs_core::{GsError, GsResult};

/// Message a host publishes when the bet field does not parse
pub const INVALID_INPUT_MESSAGE: &str = "Invalid Input";

/// Parse a bet typed by the player. Accepts finite numbers strictly above zero.
pub fn parse_bet(input: &str) -> GsResult<f64> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| GsError::InvalidInput(format!("not a number: {trimmed:?}")))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(GsError::InvalidInput(format!(
            "bet must be a positive amount, got {trimmed:?}"
        )));
    }
    Ok(value)
}
