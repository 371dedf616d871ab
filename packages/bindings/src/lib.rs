use napi::Result as NapiResult;
use napi_derive::napi;

use carloan_core::loan::breakdown::cost_slices;
use carloan_core::loan::inputs::RawLoanInputs;
use carloan_core::loan::quote::compute;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_raw(input_json: &str) -> NapiResult<RawLoanInputs> {
    serde_json::from_str(input_json).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Amortization engine
// ---------------------------------------------------------------------------

/// Full EMI summary from raw form-string inputs.
///
/// Returns the computation envelope as JSON, or the literal `null` when
/// the inputs do not produce a result — the form layer interprets that
/// as "clear any previously shown result".
#[napi]
pub fn calculate_loan(input_json: String) -> NapiResult<String> {
    let inputs = parse_raw(&input_json)?.parse();
    match compute(&inputs) {
        Some(output) => serde_json::to_string(&output).map_err(to_napi_error),
        None => Ok("null".to_string()),
    }
}

/// Year-by-year principal/interest schedule, or `null`.
#[napi]
pub fn loan_schedule(input_json: String) -> NapiResult<String> {
    let inputs = parse_raw(&input_json)?.parse();
    match compute(&inputs) {
        Some(output) => {
            serde_json::to_string(&output.result.yearly_breakdown).map_err(to_napi_error)
        }
        None => Ok("null".to_string()),
    }
}

/// Principal/interest/fees proportions for the pie chart, or `null`.
#[napi]
pub fn cost_breakdown(input_json: String) -> NapiResult<String> {
    let inputs = parse_raw(&input_json)?.parse();
    match compute(&inputs) {
        Some(output) => serde_json::to_string(&cost_slices(&output.result)).map_err(to_napi_error),
        None => Ok("null".to_string()),
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Field-level validation issues as a JSON array of {field, reason}.
#[napi]
pub fn validate_loan(input_json: String) -> NapiResult<String> {
    let inputs = parse_raw(&input_json)?.parse();
    serde_json::to_string(&inputs.validate()).map_err(to_napi_error)
}
