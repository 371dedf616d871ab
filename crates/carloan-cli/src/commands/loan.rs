use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use carloan_core::loan::breakdown::cost_slices;
use carloan_core::loan::inputs::LoanInputs;
use carloan_core::loan::quote::compute;

use crate::input;

/// Loan parameters shared by every subcommand
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct LoanArgs {
    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Car price
    #[arg(long)]
    pub car_price: Option<Decimal>,

    /// Down payment
    #[arg(long)]
    pub down_payment: Option<Decimal>,

    /// Annual interest rate in percent (8.5 = 8.5%/yr)
    #[arg(long, alias = "rate")]
    pub interest_rate: Option<Decimal>,

    /// Loan tenure in whole years (1-8)
    #[arg(long, alias = "tenure")]
    pub tenure_years: Option<u32>,

    /// Processing fee
    #[arg(long)]
    pub processing_fee: Option<Decimal>,

    /// Insurance
    #[arg(long)]
    pub insurance: Option<Decimal>,

    /// Registration fee
    #[arg(long)]
    pub registration_fee: Option<Decimal>,

    /// Other charges
    #[arg(long)]
    pub other_charges: Option<Decimal>,
}

impl LoanArgs {
    fn into_inputs(self) -> Result<LoanInputs, Box<dyn std::error::Error>> {
        if let Some(ref path) = self.input {
            return input::file::read_input(path);
        }
        if let Some(inputs) = input::stdin::read_stdin()? {
            return Ok(inputs);
        }
        self.inputs_from_flags()
    }

    fn inputs_from_flags(self) -> Result<LoanInputs, Box<dyn std::error::Error>> {
        Ok(LoanInputs {
            car_price: self
                .car_price
                .ok_or("--car-price is required (or provide --input)")?,
            down_payment: self.down_payment.unwrap_or(Decimal::ZERO),
            interest_rate: self
                .interest_rate
                .ok_or("--interest-rate is required (or provide --input)")?,
            loan_tenure_years: self
                .tenure_years
                .ok_or("--tenure-years is required (or provide --input)")?,
            processing_fee: self.processing_fee.unwrap_or(Decimal::ZERO),
            insurance: self.insurance.unwrap_or(Decimal::ZERO),
            registration_fee: self.registration_fee.unwrap_or(Decimal::ZERO),
            other_charges: self.other_charges.unwrap_or(Decimal::ZERO),
        })
    }
}

/// Turn an absent engine result into an error listing each field issue.
fn no_result_error(inputs: &LoanInputs) -> Box<dyn std::error::Error> {
    let issues = inputs.validate();
    if issues.is_empty() {
        return "no result produced for the given inputs".into();
    }
    let details: Vec<String> = issues
        .iter()
        .map(|i| format!("{}: {}", i.field, i.reason))
        .collect();
    details.join("; ").into()
}

pub fn run_emi(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = args.into_inputs()?;
    match compute(&inputs) {
        Some(output) => Ok(serde_json::to_value(output)?),
        None => Err(no_result_error(&inputs)),
    }
}

pub fn run_schedule(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = args.into_inputs()?;
    match compute(&inputs) {
        Some(output) => Ok(serde_json::to_value(output.result.yearly_breakdown)?),
        None => Err(no_result_error(&inputs)),
    }
}

pub fn run_breakdown(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = args.into_inputs()?;
    match compute(&inputs) {
        Some(output) => Ok(serde_json::to_value(cost_slices(&output.result))?),
        None => Err(no_result_error(&inputs)),
    }
}

pub fn run_validate(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = args.into_inputs()?;
    let issues = inputs.validate();
    Ok(serde_json::json!({
        "valid": issues.is_empty(),
        "issues": issues,
    }))
}
