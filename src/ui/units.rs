//! Currency unit formatting for ticket prices.
//!
//! Ledger prices are integers in the smallest currency unit. How they are
//! shown is the host's choice, so cards go through a [`UnitFormatter`].
//! [`EtherUnits`] is the shipped formatter: 18 decimals, `"<x> ETH"`.

use std::fmt::Debug;

/// Decimal places of one ether.
pub const ETHER_DECIMALS: u32 = 18;

/// Turns a smallest-unit amount into display text.
pub trait UnitFormatter: Debug {
    fn format(&self, amount: u128) -> String;
}

/// Formats wei amounts as ether.
///
/// # Example
///
/// ```rust
/// use showfinder::ui::units::{EtherUnits, UnitFormatter};
///
/// assert_eq!(EtherUnits.format(10_000_000_000_000_000), "0.01 ETH");
/// assert_eq!(EtherUnits.format(2_000_000_000_000_000_000), "2.0 ETH");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EtherUnits;

impl UnitFormatter for EtherUnits {
    fn format(&self, amount: u128) -> String {
        format!("{} ETH", format_units(amount, ETHER_DECIMALS))
    }
}

/// Renders `amount / 10^decimals` as a decimal string.
///
/// Trailing fractional zeros are dropped but at least one fractional digit is
/// kept, so whole amounts read `"1.0"`.
#[must_use]
pub fn format_units(amount: u128, decimals: u32) -> String {
    if decimals == 0 {
        return format!("{amount}.0");
    }
    let digits = format!("{amount:0>width$}", width = decimals as usize + 1);
    let (whole, fraction) = digits.split_at(digits.len() - decimals as usize);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{whole}.0")
    } else {
        format!("{whole}.{fraction}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_wei_as_ether() {
        assert_eq!(EtherUnits.format(0), "0.0 ETH");
        assert_eq!(EtherUnits.format(1), "0.000000000000000001 ETH");
        assert_eq!(EtherUnits.format(1_500_000_000_000_000_000), "1.5 ETH");
        assert_eq!(EtherUnits.format(25_000_000_000_000_000), "0.025 ETH");
    }

    #[test]
    fn format_units_handles_small_scales() {
        assert_eq!(format_units(12345, 2), "123.45");
        assert_eq!(format_units(500, 2), "5.0");
        assert_eq!(format_units(7, 0), "7.0");
        assert_eq!(format_units(u128::MAX, 18), "340282366920938463463.374607431768211455");
    }
}
