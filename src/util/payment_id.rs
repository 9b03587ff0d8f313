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

use rand::{rngs::OsRng, RngCore};

/// Generate a random 64-bit payment ID, hex encoded. At this length the
/// chance of a collision between randomly generated IDs is not
/// negligible (50% around 5 billion generated IDs); recipients minting
/// them are expected to check for uniqueness.
pub fn new_payment_id64() -> String {
    let mut buf = [0u8; 8];
    OsRng.fill_bytes(&mut buf);
    hex::encode(buf)
}

/// Generate a random 256-bit payment ID, hex encoded.
pub fn new_payment_id256() -> String {
    let mut buf = [0u8; 32];
    OsRng.fill_bytes(&mut buf);
    hex::encode(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_id_form() {
        let short = new_payment_id64();
        let long = new_payment_id256();

        assert_eq!(short.len(), 16);
        assert_eq!(long.len(), 64);
        assert!(short.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(long.chars().all(|c| c.is_ascii_hexdigit()));

        // Randomness sanity check, not determinism.
        assert_ne!(new_payment_id64(), short);
        assert_ne!(new_payment_id256(), long);
    }
}
