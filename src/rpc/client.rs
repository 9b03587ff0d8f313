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

//! JSON-RPC client-side implementation
use std::collections::HashMap;

use log::{debug, error};
use serde_json::Value;
use surf::http::headers::{HeaderName, HeaderValue};
use url::Url;

use super::jsonrpc::{JsonRequest, JsonResult};
use crate::{
    error::{ErrorCode, WalletError},
    Error, Result,
};

/// JSON-RPC client performing single-shot HTTP POST requests.
/// Holds no per-call state and is safe to share across concurrently
/// issued calls.
pub struct RpcClient {
    endpoint: Url,
    custom_headers: HashMap<String, String>,
    client: surf::Client,
}

impl RpcClient {
    /// Instantiate a new [`RpcClient`] posting to the given endpoint.
    /// Custom headers are attached verbatim to every request.
    pub fn new(
        endpoint: Url,
        custom_headers: HashMap<String, String>,
        client: surf::Client,
    ) -> Self {
        Self { endpoint, custom_headers, client }
    }

    /// Send a given JSON-RPC request and return the reply's result value.
    /// An error object in the reply is decoded into [`Error::WalletRpc`],
    /// with code and message passed through unmodified. Each call is a
    /// single shot, there are no retries.
    pub async fn request(&self, req: JsonRequest) -> Result<Value> {
        let req_id = req.id;
        let body = req.stringify()?;
        debug!(target: "walletrpc::client", "--> {}", body);

        let mut http_req = self
            .client
            .post(self.endpoint.as_str())
            .header("Content-Type", "application/json");

        for (k, v) in &self.custom_headers {
            let name = HeaderName::from_bytes(k.as_bytes().to_vec())
                .map_err(|e| Error::HttpRequestFailed(e.to_string()))?;
            let value = HeaderValue::from_bytes(v.as_bytes().to_vec())
                .map_err(|e| Error::HttpRequestFailed(e.to_string()))?;
            http_req = http_req.header(name, value);
        }

        let mut rep = match http_req.body(body).send().await {
            Ok(v) => v,
            Err(e) => {
                error!(
                    target: "walletrpc::client",
                    "HTTP request to {} failed: {}", self.endpoint, e
                );
                return Err(Error::HttpRequestFailed(e.to_string()))
            }
        };

        if rep.status() != surf::StatusCode::Ok {
            error!(
                target: "walletrpc::client",
                "HTTP status {} from {}", rep.status(), self.endpoint
            );
            return Err(Error::HttpStatus(rep.status() as u16))
        }

        let rep_body = match rep.body_string().await {
            Ok(v) => v,
            Err(e) => return Err(Error::HttpRequestFailed(e.to_string())),
        };
        debug!(target: "walletrpc::client", "<-- {}", rep_body);

        match serde_json::from_str(&rep_body)? {
            JsonResult::Response(r) => {
                if r.id != req_id {
                    return Err(Error::RpcIdMismatch(req_id, r.id))
                }
                Ok(r.result)
            }
            JsonResult::Error(e) => Err(WalletError {
                code: ErrorCode::from_code(e.error.code),
                message: e.error.message,
            }
            .into()),
        }
    }
}
