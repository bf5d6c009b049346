use alloy::primitives::{utils::parse_units, U256};

use crate::config::SLIPPAGE_KEEP_PERCENT;

/// How much of the input token to swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountSpec {
    /// Whole-number percentage of the current balance, `0..=100`.
    Percent(u64),
    /// Human-readable decimal amount, e.g. `"12.5"`.
    Fixed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAmount(pub String);

impl AmountSpec {
    pub fn parse(spec: &str) -> Result<Self, InvalidAmount> {
        let spec = spec.trim();
        match spec.strip_suffix('%') {
            Some(percent) => {
                let percent: u64 = percent
                    .trim()
                    .parse()
                    .map_err(|_| InvalidAmount("percentage must be a whole number".into()))?;
                if percent > 100 {
                    return Err(InvalidAmount("percentage must not exceed 100".into()));
                }
                Ok(AmountSpec::Percent(percent))
            }
            None => {
                split_decimal(spec)?;
                Ok(AmountSpec::Fixed)
            }
        }
    }
}

/// Resolves `spec` against the token balance into smallest units.
///
/// Percentages take `floor(balance * percent / 100)`, fixed amounts are scaled
/// by `10^decimals` with surplus fractional digits dropped.
pub fn compute_amount_in(spec: &str, balance: U256, decimals: u8) -> Result<U256, InvalidAmount> {
    match AmountSpec::parse(spec)? {
        AmountSpec::Percent(percent) => Ok(percent_of(balance, percent)),
        AmountSpec::Fixed => parse_fixed(spec.trim(), decimals),
    }
}

/// Lowest acceptable output for a quoted `expected` amount.
pub fn min_amount_out(expected: U256) -> U256 {
    percent_of(expected, SLIPPAGE_KEEP_PERCENT)
}

/// `floor(value * percent / 100)` without overflowing for values near `U256::MAX`.
pub fn percent_of(value: U256, percent: u64) -> U256 {
    let hundred = U256::from(100);
    let percent = U256::from(percent);
    let (quotient, remainder) = (value / hundred, value % hundred);
    quotient * percent + remainder * percent / hundred
}

fn parse_fixed(spec: &str, decimals: u8) -> Result<U256, InvalidAmount> {
    let (whole, fraction) = split_decimal(spec)?;
    let fraction = &fraction[..fraction.len().min(decimals as usize)];
    let normalized = if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{fraction}")
    };
    parse_units(&normalized, decimals)
        .map(|units| units.get_absolute())
        .map_err(|err| InvalidAmount(err.to_string()))
}

fn split_decimal(spec: &str) -> Result<(&str, &str), InvalidAmount> {
    let (whole, fraction) = spec.split_once('.').unwrap_or((spec, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(InvalidAmount("amount has no digits".into()));
    }
    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(whole) || !is_digits(fraction) {
        return Err(InvalidAmount("amount must be a plain decimal number".into()));
    }
    Ok((if whole.is_empty() { "0" } else { whole }, fraction))
}

impl std::fmt::Display for InvalidAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvalidAmount {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ether(units: u64) -> U256 {
        U256::from(units) * U256::from(10).pow(U256::from(18))
    }

    #[test]
    fn half_of_balance() {
        let amount = compute_amount_in("50%", ether(1000), 18).unwrap();
        assert_eq!(amount, ether(500));
    }

    #[test]
    fn percent_floors() {
        assert_eq!(compute_amount_in("33%", U256::from(10), 0).unwrap(), U256::from(3));
        assert_eq!(compute_amount_in("99%", U256::from(1), 0).unwrap(), U256::ZERO);
    }

    #[test]
    fn percent_of_zero_is_zero() {
        assert_eq!(compute_amount_in("0%", ether(7), 18).unwrap(), U256::ZERO);
        assert_eq!(compute_amount_in("100%", U256::ZERO, 18).unwrap(), U256::ZERO);
    }

    #[test]
    fn percent_never_exceeds_balance() {
        for balance in [0u64, 1, 99, 100, 101, 12_345, u64::MAX] {
            let balance = U256::from(balance);
            for percent in [0u64, 1, 33, 50, 99, 100] {
                let amount = percent_of(balance, percent);
                assert!(amount <= balance);
                assert_eq!(amount, balance * U256::from(percent) / U256::from(100));
            }
        }
        assert_eq!(percent_of(U256::MAX, 100), U256::MAX);
    }

    #[test]
    fn percent_must_be_whole_and_bounded() {
        assert!(AmountSpec::parse("12.5%").is_err());
        assert!(AmountSpec::parse("101%").is_err());
        assert!(AmountSpec::parse("-5%").is_err());
        assert!(AmountSpec::parse("%").is_err());
        assert_eq!(AmountSpec::parse(" 100% ").unwrap(), AmountSpec::Percent(100));
    }

    #[test]
    fn fixed_amount_is_scaled_by_decimals() {
        assert_eq!(compute_amount_in("10", U256::ZERO, 6).unwrap(), U256::from(10_000_000));
        assert_eq!(
            compute_amount_in("1.5", U256::ZERO, 18).unwrap(),
            U256::from(1_500_000_000_000_000_000u128)
        );
        assert_eq!(compute_amount_in(".25", U256::ZERO, 2).unwrap(), U256::from(25));
        assert_eq!(compute_amount_in("7", U256::ZERO, 0).unwrap(), U256::from(7));
    }

    #[test]
    fn fixed_amount_truncates_extra_digits() {
        assert_eq!(
            compute_amount_in("1.23456789", U256::ZERO, 6).unwrap(),
            U256::from(1_234_567)
        );
        assert_eq!(compute_amount_in("0.0000009", U256::ZERO, 6).unwrap(), U256::ZERO);
        assert_eq!(compute_amount_in("3.99", U256::ZERO, 0).unwrap(), U256::from(3));
    }

    #[test]
    fn fixed_amount_ignores_balance() {
        assert_eq!(compute_amount_in("2", U256::from(1), 0).unwrap(), U256::from(2));
    }

    #[test]
    fn malformed_amounts_are_rejected() {
        for spec in ["", "abc", "-1", "1.2.3", "1e18", ".", "0x10"] {
            assert!(AmountSpec::parse(spec).is_err(), "{spec:?} should be rejected");
        }
    }

    #[test]
    fn min_out_keeps_ninety_five_percent() {
        assert_eq!(min_amount_out(U256::from(1000)), U256::from(950));
        assert_eq!(min_amount_out(U256::from(19)), U256::from(18));
        assert_eq!(min_amount_out(U256::from(1)), U256::ZERO);
        for expected in [0u64, 1, 20, 21, 999, 1_000_003] {
            let expected = U256::from(expected);
            let min = min_amount_out(expected);
            assert!(min <= expected);
            assert_eq!(min, expected * U256::from(95) / U256::from(100));
        }
    }
}
