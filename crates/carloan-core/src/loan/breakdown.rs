use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::loan::quote::AmortizationResult;
use crate::types::Money;

/// One wedge of the cost decomposition: principal, interest, or fees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSlice {
    pub label: String,
    pub amount: Money,
    /// Fraction of the decomposed total, 4 decimal places
    pub share: Decimal,
}

/// Decompose a result into the principal / interest / additional-costs
/// proportions a pie-style chart renders. Purely a view over the result.
pub fn cost_slices(result: &AmortizationResult) -> Vec<CostSlice> {
    let components = [
        ("Principal", result.loan_amount),
        ("Interest", result.total_interest),
        ("Additional Costs", result.total_additional_costs),
    ];

    let total: Decimal = components.iter().map(|(_, amount)| *amount).sum();
    if total <= Decimal::ZERO {
        return Vec::new();
    }

    components
        .iter()
        .map(|(label, amount)| CostSlice {
            label: (*label).into(),
            amount: *amount,
            share: (amount / total).round_dp(4),
        })
        .collect()
}
