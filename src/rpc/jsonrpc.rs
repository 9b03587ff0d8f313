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

//! JSON-RPC 2.0 object definitions
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;

/// Wrapping enum around the two reply object types. A reply carries
/// either a result or an error object, never both. The error variant is
/// tried first since only it has the `error` key.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonResult {
    Error(JsonError),
    Response(JsonResponse),
}

/// A JSON-RPC request object
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JsonRequest {
    /// JSON-RPC version
    pub jsonrpc: String,
    /// Request ID
    pub id: u64,
    /// Request method
    pub method: String,
    /// Request parameters
    pub params: Value,
}

impl JsonRequest {
    /// Create a new [`JsonRequest`] object with the given method and
    /// parameters. The request ID is chosen randomly; the reply must
    /// echo it back.
    pub fn new(method: &str, params: Value) -> Self {
        assert!(params.is_object() || params.is_array());
        Self {
            jsonrpc: "2.0".to_string(),
            id: OsRng.gen::<u32>() as u64,
            method: method.to_string(),
            params,
        }
    }

    /// Convert the object into a JSON string
    pub fn stringify(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A JSON-RPC response object
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JsonResponse {
    /// JSON-RPC version
    pub jsonrpc: String,
    /// Response result
    pub result: Value,
    /// Request ID
    pub id: u64,
}

/// A JSON-RPC error object
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JsonError {
    /// JSON-RPC version
    pub jsonrpc: String,
    /// JSON-RPC error (code and message)
    pub error: JsonErrorVal,
    /// Request ID
    pub id: u64,
}

/// A JSON-RPC error value (code and message)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JsonErrorVal {
    /// Error code
    pub code: i64,
    /// Error message
    pub message: String,
}
