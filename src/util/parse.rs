/* This file is part of DarkFi (https://dark.fi)
 *
 * Copyright (C) 2020-2025 Dyne.org foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

use crate::{util::unit, Error, Result};

/// Number of base-10 fractional digits in one monero (10^12 atomic units).
pub const XMR_BASE10_DECIMALS: usize = 12;

/// Encode a `u64` amount into a base-10 fixed-point string with the given
/// number of fractional digits. Works on the zero-padded decimal
/// representation directly, so large balances never lose precision to
/// floating point.
pub fn encode_base10(amount: u64, decimal_places: usize) -> String {
    let mut amount_str = amount.to_string();
    while amount_str.len() <= decimal_places {
        amount_str.insert(0, '0');
    }
    amount_str.insert(amount_str.len() - decimal_places, '.');
    amount_str
}

/// Decode a base-10 fixed-point string into a `u64` amount with the given
/// number of fractional digits. With `strict` set, excess nonzero
/// precision is an error; otherwise it is truncated.
pub fn decode_base10(amount: &str, decimal_places: usize, strict: bool) -> Result<u64> {
    let mut parts = amount.splitn(2, '.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next().unwrap_or("");

    if strict && frac_part.chars().skip(decimal_places).any(|c| c != '0') {
        return Err(Error::ParseFailed("Too many decimal places"))
    }

    let mut frac: String = frac_part.chars().take(decimal_places).collect();
    while frac.len() < decimal_places {
        frac.push('0');
    }

    let atomic = format!("{}{}", int_part, frac);
    Ok(atomic.parse::<u64>()?)
}

/// Convert an atomic unit amount to a human-readable decimal string with
/// exactly twelve fractional digits.
pub fn xmr_to_decimal(amount: u64) -> String {
    encode_base10(amount, XMR_BASE10_DECIMALS)
}

/// Convert an atomic unit amount to an approximate `f64`. Only for
/// display, the fixed-point form is the exact one.
pub fn xmr_to_f64(amount: u64) -> f64 {
    amount as f64 / unit::MONERO as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base10_encoding() {
        assert_eq!(xmr_to_decimal(34000200000), "0.034000200000");
        assert_eq!(xmr_to_decimal(15_000_000_000_000), "15.000000000000");
        assert_eq!(xmr_to_decimal(0), "0.000000000000");
        assert_eq!(xmr_to_decimal(u64::MAX), "18446744.073709551615");

        // Exactly one decimal point, exactly twelve digits after it.
        for v in [0, 1, 999, 1_000_000_000_000, 9_999_999_999_999] {
            let s = xmr_to_decimal(v);
            let (int_part, frac_part) = s.split_once('.').unwrap();
            assert!(!frac_part.contains('.'));
            assert_eq!(frac_part.len(), 12);
            // Parsing the digits back as an unscaled integer recovers v.
            let unscaled = format!("{}{}", int_part, frac_part);
            assert_eq!(unscaled.parse::<u64>().unwrap(), v);
        }
    }

    #[test]
    fn base10_decoding() {
        assert_eq!(decode_base10("0.034000200000", 12, true).unwrap(), 34000200000);
        assert_eq!(decode_base10("15", 12, true).unwrap(), 15_000_000_000_000);
        assert_eq!(decode_base10("15.0", 12, true).unwrap(), 15_000_000_000_000);
        assert_eq!(decode_base10("0.0000000000001", 12, false).unwrap(), 0);

        assert!(decode_base10("0.0000000000001", 12, true).is_err());
        assert!(decode_base10("nan", 12, true).is_err());

        // Round trip over the encoder.
        for v in [1u64, 20000000000, 10_000_000_000_000 - 1] {
            assert_eq!(decode_base10(&encode_base10(v, 12), 12, true).unwrap(), v);
        }
    }

    #[test]
    fn float_approximation() {
        assert!((xmr_to_f64(20000000000) - 0.02).abs() < f64::EPSILON);
        assert!((xmr_to_f64(1_000_000_000_000) - 1.0).abs() < f64::EPSILON);
    }
}
