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

//! Typed client for the monero-wallet-rpc daemon. The method surface is
//! split by concern across this module's files; every method is a thin
//! adapter around [`WalletClient::wallet_request`].
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::{
    rpc::{client::RpcClient, jsonrpc::JsonRequest},
    Result,
};

mod address;
mod control;
mod query;
mod transfer;

/// Wallet RPC client configuration.
pub struct Config {
    /// Endpoint of the wallet daemon, e.g. `http://127.0.0.1:18082/json_rpc`
    pub endpoint: Url,
    /// Headers attached verbatim to every request
    pub custom_headers: HashMap<String, String>,
    /// HTTP client to use. `None` means a default client; supply one to
    /// control TLS, proxying and timeouts, or to stub the transport.
    pub http_client: Option<surf::Client>,
}

impl Config {
    /// Create a configuration with no custom headers and a default
    /// HTTP client.
    pub fn new(endpoint: Url) -> Self {
        Self { endpoint, custom_headers: HashMap::new(), http_client: None }
    }
}

/// Client handle for a remote monero-wallet-rpc daemon. Immutable after
/// construction and safe to share across concurrently issued calls;
/// every call is an independent single-shot request.
pub struct WalletClient {
    rpc_client: RpcClient,
}

impl WalletClient {
    /// Instantiate a new [`WalletClient`] from the given configuration.
    pub fn new(config: Config) -> Self {
        let http_client = config.http_client.unwrap_or_else(surf::Client::new);
        Self {
            rpc_client: RpcClient::new(config.endpoint, config.custom_headers, http_client),
        }
    }

    /// Perform a request against the wallet daemon with the given method
    /// name and parameters, decoding the reply's result into `R`. The
    /// method name is sent exactly as given, the daemon's method table
    /// is case-sensitive.
    pub(crate) async fn wallet_request<R: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<R> {
        let req = JsonRequest::new(method, params);
        let rep = self.rpc_client.request(req).await?;
        Ok(serde_json::from_value(rep)?)
    }

    /// Perform a request whose result carries no meaningful payload.
    /// The reply is still fully parsed, so an error object coming back
    /// in place of the empty result is surfaced.
    pub(crate) async fn wallet_request_void(&self, method: &str, params: Value) -> Result<()> {
        let _: Value = self.wallet_request(method, params).await?;
        Ok(())
    }
}
