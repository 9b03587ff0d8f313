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

//! Monero monetary unit denominations, expressed in atomic (piconero)
//! units. One monero is 10^12 piconero.

pub const PICONERO: u64 = 1;
pub const NANONERO: u64 = 1_000 * PICONERO;
pub const MICRONERO: u64 = 1_000 * NANONERO;
pub const MILLINERO: u64 = 1_000 * MICRONERO;
pub const CENTINERO: u64 = 10 * MILLINERO;
pub const DECINERO: u64 = 10 * CENTINERO;
pub const MONERO: u64 = 10 * DECINERO;
pub const DECANERO: u64 = 10 * MONERO;
pub const HECTONERO: u64 = 10 * DECANERO;
pub const KILONERO: u64 = 10 * HECTONERO;
pub const MEGANERO: u64 = 1_000 * KILONERO;
