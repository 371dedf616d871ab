use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Rate};

/// Tenure is a discrete slider choice in the originating form: 1 to 8 years.
pub const MAX_TENURE_YEARS: u32 = 8;

/// Loan parameters as a form submits them: raw strings, loosely validated.
///
/// Empty or non-numeric fields parse to zero, which then falls into the
/// normal validation net. A `loan_amount` field is accepted for
/// compatibility with form payloads but ignored — the loan amount is
/// always derived from price and down payment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawLoanInputs {
    pub car_price: String,
    pub down_payment: String,
    pub loan_amount: String,
    pub interest_rate: String,
    pub loan_tenure_years: String,
    pub processing_fee: String,
    pub insurance: String,
    pub registration_fee: String,
    pub other_charges: String,
}

impl RawLoanInputs {
    /// Parse into typed inputs. Never fails: unparseable fields become 0.
    pub fn parse(&self) -> LoanInputs {
        LoanInputs {
            car_price: parse_amount(&self.car_price),
            down_payment: parse_amount(&self.down_payment),
            interest_rate: parse_amount(&self.interest_rate),
            loan_tenure_years: parse_years(&self.loan_tenure_years),
            processing_fee: parse_amount(&self.processing_fee),
            insurance: parse_amount(&self.insurance),
            registration_fee: parse_amount(&self.registration_fee),
            other_charges: parse_amount(&self.other_charges),
        }
    }
}

fn parse_amount(raw: &str) -> Decimal {
    raw.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

fn parse_years(raw: &str) -> u32 {
    raw.trim()
        .parse::<Decimal>()
        .ok()
        .and_then(|d| d.trunc().to_u32())
        .unwrap_or(0)
}

/// Validated-shape loan parameters. Immutable per computation.
///
/// The loan amount is intentionally not a field: it is derived on read
/// from price and down payment, so the two can never drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanInputs {
    pub car_price: Money,
    pub down_payment: Money,
    /// Annual percentage rate (8.5 = 8.5%/yr)
    pub interest_rate: Rate,
    pub loan_tenure_years: u32,
    pub processing_fee: Money,
    pub insurance: Money,
    pub registration_fee: Money,
    pub other_charges: Money,
}

impl Default for LoanInputs {
    fn default() -> Self {
        LoanInputs {
            car_price: Decimal::ZERO,
            down_payment: Decimal::ZERO,
            interest_rate: Decimal::ZERO,
            loan_tenure_years: 0,
            processing_fee: Decimal::ZERO,
            insurance: Decimal::ZERO,
            registration_fee: Decimal::ZERO,
            other_charges: Decimal::ZERO,
        }
    }
}

impl LoanInputs {
    /// Financed principal: price less down payment.
    pub fn loan_amount(&self) -> Money {
        self.car_price - self.down_payment
    }

    /// Sum of the four fee fields.
    pub fn total_additional_costs(&self) -> Money {
        self.processing_fee + self.insurance + self.registration_fee + self.other_charges
    }

    /// Check every documented constraint, reporting one issue per
    /// offending field so the caller can surface field-level messages.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.car_price <= Decimal::ZERO {
            issues.push(ValidationIssue::new(
                "car_price",
                "Car price must be greater than 0",
            ));
        }
        if self.down_payment < Decimal::ZERO {
            issues.push(ValidationIssue::new(
                "down_payment",
                "Down payment cannot be negative",
            ));
        } else if self.car_price > Decimal::ZERO && self.loan_amount() <= Decimal::ZERO {
            issues.push(ValidationIssue::new(
                "down_payment",
                "Down payment cannot be greater than or equal to car price",
            ));
        }
        if self.interest_rate < Decimal::ZERO {
            issues.push(ValidationIssue::new(
                "interest_rate",
                "Interest rate cannot be negative",
            ));
        }
        if self.loan_tenure_years == 0 {
            issues.push(ValidationIssue::new(
                "loan_tenure_years",
                "Loan tenure is required",
            ));
        } else if self.loan_tenure_years > MAX_TENURE_YEARS {
            issues.push(ValidationIssue::new(
                "loan_tenure_years",
                "Loan tenure must be at most 8 years",
            ));
        }

        for (field, amount) in [
            ("processing_fee", self.processing_fee),
            ("insurance", self.insurance),
            ("registration_fee", self.registration_fee),
            ("other_charges", self.other_charges),
        ] {
            if amount < Decimal::ZERO {
                issues.push(ValidationIssue::new(
                    field,
                    "Fees and charges cannot be negative",
                ));
            }
        }

        issues
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// One field-level validation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: String,
    pub reason: String,
}

impl ValidationIssue {
    fn new(field: &str, reason: &str) -> Self {
        ValidationIssue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
