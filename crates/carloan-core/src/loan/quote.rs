use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::loan::emi::{monthly_payment, monthly_rate, num_payments};
use crate::loan::inputs::LoanInputs;
use crate::loan::schedule::{yearly_breakdown, YearlyRecord};
use crate::types::{round_money, with_metadata, ComputationOutput, Money};

/// Complete amortization summary. Every figure is rounded to whole
/// currency units; the identities between them hold in the rounded
/// domain (`total_interest = total_emi - loan_amount`, etc.).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationResult {
    pub emi: Money,
    pub total_emi: Money,
    pub total_interest: Money,
    pub total_cost: Money,
    pub loan_amount: Money,
    pub total_additional_costs: Money,
    pub yearly_breakdown: Vec<YearlyRecord>,
}

/// The single engine entry point.
///
/// Returns `None` whenever any documented constraint fails — the caller
/// treats absence as "clear any previously shown result". This function
/// never errors: incomplete input parses to zeros upstream and lands in
/// the same validation net.
pub fn compute(inputs: &LoanInputs) -> Option<ComputationOutput<AmortizationResult>> {
    let start = Instant::now();

    if !inputs.is_valid() {
        return None;
    }

    let mut warnings: Vec<String> = Vec::new();

    let loan_amount = inputs.loan_amount();
    let rate_per_month = monthly_rate(inputs.interest_rate);
    let periods = num_payments(inputs.loan_tenure_years);

    if inputs.interest_rate.is_zero() {
        warnings.push("Interest-free loan: EMI is straight principal division".into());
    }

    // Validation guarantees periods > 0 and a positive annuity factor,
    // so the payment formula cannot fail here.
    let emi_exact = monthly_payment(loan_amount, rate_per_month, periods).ok()?;

    let total_emi = round_money(emi_exact * Decimal::from(periods));
    let loan_amount_rounded = round_money(loan_amount);
    let total_interest = total_emi - loan_amount_rounded;
    let total_additional_costs = round_money(inputs.total_additional_costs());
    let total_cost = round_money(inputs.car_price) + total_additional_costs + total_interest;

    let result = AmortizationResult {
        emi: round_money(emi_exact),
        total_emi,
        total_interest,
        total_cost,
        loan_amount: loan_amount_rounded,
        total_additional_costs,
        yearly_breakdown: yearly_breakdown(
            loan_amount,
            rate_per_month,
            emi_exact,
            inputs.loan_tenure_years,
        ),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Some(with_metadata(
        "Equated Monthly Installment (annuity formula, monthly simulation)",
        &serde_json::json!({
            "loan_amount": loan_amount.to_string(),
            "annual_rate_pct": inputs.interest_rate.to_string(),
            "num_payments": periods,
        }),
        warnings,
        elapsed,
        result,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn reference_inputs() -> LoanInputs {
        LoanInputs {
            car_price: dec!(500000),
            down_payment: dec!(100000),
            interest_rate: dec!(8.5),
            loan_tenure_years: 5,
            ..LoanInputs::default()
        }
    }

    #[test]
    fn test_reference_scenario() {
        let output = compute(&reference_inputs()).unwrap();
        let r = &output.result;

        assert_eq!(r.loan_amount, dec!(400000));
        assert!((r.emi - dec!(8207)).abs() <= dec!(5));
        assert_eq!(r.total_emi, round_money(r.total_emi));
        assert!((r.total_interest - dec!(92300)).abs() <= dec!(300));
        assert_eq!(r.yearly_breakdown.len(), 5);
    }

    #[test]
    fn test_rounded_domain_identities() {
        let inputs = LoanInputs {
            processing_fee: dec!(1500),
            insurance: dec!(2500),
            ..reference_inputs()
        };
        let r = compute(&inputs).unwrap().result;

        assert_eq!(r.total_interest, r.total_emi - r.loan_amount);
        assert_eq!(r.total_additional_costs, dec!(4000));
        assert_eq!(
            r.total_cost,
            inputs.car_price + r.total_additional_costs + r.total_interest
        );
    }

    #[test]
    fn test_zero_rate_first_class() {
        let inputs = LoanInputs {
            car_price: dec!(120000),
            down_payment: dec!(0),
            interest_rate: dec!(0),
            loan_tenure_years: 1,
            ..LoanInputs::default()
        };
        let output = compute(&inputs).unwrap();
        assert_eq!(output.result.emi, dec!(10000));
        assert_eq!(output.result.total_interest, dec!(0));
        assert_eq!(output.warnings.len(), 1);
    }

    #[test]
    fn test_down_payment_at_price_yields_none() {
        let mut inputs = reference_inputs();
        inputs.down_payment = inputs.car_price;
        assert!(compute(&inputs).is_none());
    }

    #[test]
    fn test_missing_tenure_yields_none() {
        let mut inputs = reference_inputs();
        inputs.loan_tenure_years = 0;
        assert!(compute(&inputs).is_none());
    }

    #[test]
    fn test_negative_rate_yields_none() {
        let mut inputs = reference_inputs();
        inputs.interest_rate = dec!(-1);
        assert!(compute(&inputs).is_none());
    }

    #[test]
    fn test_idempotent() {
        let a = compute(&reference_inputs()).unwrap();
        let b = compute(&reference_inputs()).unwrap();
        assert_eq!(a.result, b.result);
        assert_eq!(a.warnings, b.warnings);
    }

    #[test]
    fn test_yearly_totals_approximate_total_emi() {
        let r = compute(&reference_inputs()).unwrap().result;
        let sum: Decimal = r.yearly_breakdown.iter().map(|y| y.total).sum();
        assert!((sum - r.total_emi).abs() <= dec!(60));
    }
}
