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

//! Client library for the `monero-wallet-rpc` daemon.
//!
//! Method calls are marshalled into JSON-RPC 2.0 requests, issued over
//! HTTP POST, and unmarshalled into typed responses or structured wallet
//! errors. All wallet and blockchain logic lives in the remote daemon;
//! this crate is a stateless wire adapter. There are no retries and no
//! connection pooling, callers own that policy through the pluggable
//! HTTP client.

/// Error codes and library error types
pub mod error;
pub use error::{Error, ErrorCode, Result, WalletError};

/// JSON-RPC primitives and HTTP invocation
pub mod rpc;

/// Request and response records for the wallet RPC methods
pub mod types;

/// Amount conversion and payment ID utilities
pub mod util;

/// Typed monero-wallet-rpc client
pub mod wallet;
pub use wallet::{Config, WalletClient};
