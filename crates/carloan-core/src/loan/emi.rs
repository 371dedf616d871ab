use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::CarLoanError;
use crate::types::{Money, Rate};
use crate::CarLoanResult;

/// Convert an annual percentage rate to a monthly fractional rate.
pub fn monthly_rate(annual_pct: Rate) -> Rate {
    annual_pct / dec!(1200)
}

/// Number of monthly payments over the tenure.
pub fn num_payments(tenure_years: u32) -> u32 {
    tenure_years * 12
}

/// Full-precision EMI for a loan amortized over `periods` months.
///
/// Standard annuity formula `L·r·(1+r)^n / ((1+r)^n − 1)`, with the
/// degenerate interest-free case handled explicitly. The result is not
/// rounded; callers round at their output boundary.
pub fn monthly_payment(principal: Money, rate_per_month: Rate, periods: u32) -> CarLoanResult<Money> {
    if periods == 0 {
        return Err(CarLoanError::InvalidInput {
            field: "periods".into(),
            reason: "Number of payments must be > 0".into(),
        });
    }

    if rate_per_month.is_zero() {
        return Ok(principal / Decimal::from(periods));
    }

    let one_plus_r = Decimal::ONE + rate_per_month;
    let factor = one_plus_r.powd(Decimal::from(periods));
    let annuity_denominator = factor - Decimal::ONE;

    if annuity_denominator.is_zero() {
        return Err(CarLoanError::DivisionByZero {
            context: "EMI annuity factor".into(),
        });
    }

    Ok(principal * rate_per_month * factor / annuity_denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_monthly_rate_conversion() {
        assert_eq!(monthly_rate(dec!(12)), dec!(0.01));
        // 8.5%/yr -> 0.0070833...
        let r = monthly_rate(dec!(8.5));
        assert!((r - dec!(0.00708333)).abs() < dec!(0.0000001));
    }

    #[test]
    fn test_reference_scenario() {
        // 400k at 8.5% over 60 months -> ~8207/month
        let emi = monthly_payment(dec!(400000), monthly_rate(dec!(8.5)), 60).unwrap();
        assert!((emi - dec!(8207)).abs() < dec!(5));
    }

    #[test]
    fn test_zero_rate_is_straight_division() {
        let emi = monthly_payment(dec!(120000), Decimal::ZERO, 12).unwrap();
        assert_eq!(emi, dec!(10000));
    }

    #[test]
    fn test_small_rate_approaches_zero_rate_limit() {
        let near_zero = monthly_payment(dec!(120000), dec!(0.00000001), 12).unwrap();
        assert!((near_zero - dec!(10000)).abs() < dec!(1));
    }

    #[test]
    fn test_emi_positive_for_positive_loan() {
        let emi = monthly_payment(dec!(1), monthly_rate(dec!(20)), 96).unwrap();
        assert!(emi > Decimal::ZERO);
    }

    #[test]
    fn test_emi_strictly_increases_with_rate() {
        let mut last = monthly_payment(dec!(400000), monthly_rate(dec!(1)), 60).unwrap();
        for pct in [2, 5, 8, 12, 20] {
            let emi = monthly_payment(dec!(400000), monthly_rate(Decimal::from(pct)), 60).unwrap();
            assert!(emi > last, "EMI at {pct}% should exceed EMI at lower rate");
            last = emi;
        }
    }

    #[test]
    fn test_emi_decreases_with_longer_tenure() {
        let rate = monthly_rate(dec!(8.5));
        let mut last = monthly_payment(dec!(400000), rate, num_payments(1)).unwrap();
        for years in 2..=8 {
            let emi = monthly_payment(dec!(400000), rate, num_payments(years)).unwrap();
            assert!(emi < last, "EMI over {years}y should be below shorter tenure");
            last = emi;
        }
    }

    #[test]
    fn test_zero_periods_rejected() {
        assert!(monthly_payment(dec!(1000), dec!(0.01), 0).is_err());
    }
}
