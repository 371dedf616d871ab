use std::io::{self, Read};

use carloan_core::loan::inputs::LoanInputs;

/// Read typed loan inputs from stdin if data is being piped.
/// Returns None if stdin is a TTY (interactive) or the pipe is empty.
pub fn read_stdin() -> Result<Option<LoanInputs>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    parse_payload(&buffer)
}

fn parse_payload(payload: &str) -> Result<Option<LoanInputs>, Box<dyn std::error::Error>> {
    let trimmed = payload.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let inputs: LoanInputs = serde_json::from_str(trimmed)?;
    Ok(Some(inputs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_pipe_is_none() {
        assert!(parse_payload("").unwrap().is_none());
        assert!(parse_payload("  \n").unwrap().is_none());
    }

    #[test]
    fn test_payload_parses_typed_inputs() {
        let inputs = parse_payload(
            r#"{"car_price": "500000", "down_payment": "100000",
                "interest_rate": "8.5", "loan_tenure_years": 5}"#,
        )
        .unwrap()
        .unwrap();
        assert_eq!(inputs.loan_amount(), dec!(400000));
        assert_eq!(inputs.loan_tenure_years, 5);
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        assert!(parse_payload("{not json").is_err());
    }
}
