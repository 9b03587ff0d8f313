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

use std::fmt;

/// Main result type used throughout the codebase.
pub type Result<T> = std::result::Result<T, Error>;

/// General library errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    // ==============
    // Parsing errors
    // ==============
    #[error("Parse failed: {0}")]
    ParseFailed(&'static str),

    #[error(transparent)]
    ParseIntError(#[from] std::num::ParseIntError),

    #[error("serde_json error: {0}")]
    SerdeJsonError(String),

    // ======================
    // Transport-level errors
    // ======================
    #[error("HTTP request failed: {0}")]
    HttpRequestFailed(String),

    #[error("Unexpected HTTP status {0}")]
    HttpStatus(u16),

    // ================
    // JSON-RPC errors
    // ================
    #[error("JSON-RPC reply id mismatch: sent {0}, received {1}")]
    RpcIdMismatch(u64, u64),

    #[error("Wallet RPC error: {0}")]
    WalletRpc(#[from] WalletError),
}

impl Error {
    /// Returns the structured [`WalletError`] if this error is a decoded
    /// JSON-RPC error object from the wallet daemon, and `None` for
    /// transport or wire-level failures.
    pub fn wallet_error(&self) -> Option<&WalletError> {
        match self {
            Self::WalletRpc(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the offending HTTP status code, when this error carries one.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::SerdeJsonError(err.to_string())
    }
}

/// An error object returned by the wallet daemon over JSON-RPC.
/// The code and message pass through from the daemon unmodified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct WalletError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message from the daemon
    pub message: String,
}

/// monero-wallet-rpc error codes, as enumerated by the wallet RPC server.
/// Codes outside the known set are carried through as `ServerError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    UnknownError,
    WrongAddress,
    DaemonIsBusy,
    GenericTransferError,
    WrongPaymentId,
    TransferType,
    Denied,
    WrongTxid,
    WrongSignature,
    WrongKeyImage,
    WrongUri,
    WrongIndex,
    NotOpen,
    ServerError(i64),
}

impl ErrorCode {
    pub fn code(&self) -> i64 {
        match *self {
            Self::UnknownError => -1,
            Self::WrongAddress => -2,
            Self::DaemonIsBusy => -3,
            Self::GenericTransferError => -4,
            Self::WrongPaymentId => -5,
            Self::TransferType => -6,
            Self::Denied => -7,
            Self::WrongTxid => -8,
            Self::WrongSignature => -9,
            Self::WrongKeyImage => -10,
            Self::WrongUri => -11,
            Self::WrongIndex => -12,
            Self::NotOpen => -13,
            Self::ServerError(c) => c,
        }
    }

    pub fn from_code(code: i64) -> Self {
        match code {
            -1 => Self::UnknownError,
            -2 => Self::WrongAddress,
            -3 => Self::DaemonIsBusy,
            -4 => Self::GenericTransferError,
            -5 => Self::WrongPaymentId,
            -6 => Self::TransferType,
            -7 => Self::Denied,
            -8 => Self::WrongTxid,
            -9 => Self::WrongSignature,
            -10 => Self::WrongKeyImage,
            -11 => Self::WrongUri,
            -12 => Self::WrongIndex,
            -13 => Self::NotOpen,
            c => Self::ServerError(c),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
