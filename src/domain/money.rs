use rust_decimal::Decimal;

/// Money is a signed decimal. Balances have no lower bound, so negative
/// values are legitimate ledger state.
pub type Amount = Decimal;

/// Format an amount with at least one fractional digit.
/// Example: 10 -> "10.0", 10.50 -> "10.5", -3.25 -> "-3.25"
pub fn format_amount(amount: Amount) -> String {
    let normalized = amount.normalize();
    if normalized.scale() == 0 {
        format!("{}.0", normalized)
    } else {
        normalized.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec!(10)), "10.0");
        assert_eq!(format_amount(dec!(10.00)), "10.0");
        assert_eq!(format_amount(dec!(10.50)), "10.5");
        assert_eq!(format_amount(dec!(0)), "0.0");
        assert_eq!(format_amount(dec!(-3.25)), "-3.25");
        assert_eq!(format_amount(dec!(-90)), "-90.0");
    }
}
