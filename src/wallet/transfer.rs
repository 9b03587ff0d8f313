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

use serde_json::json;

use super::WalletClient;
use crate::{
    types::{
        SweepAllRequest, SweepAllResponse, SweepDustResponse, TransferRequest, TransferResponse,
        TransferSplitRequest, TransferSplitResponse,
    },
    Result,
};

impl WalletClient {
    /// Send monero to a number of recipients. The daemon constructs,
    /// signs and (unless `do_not_relay` is set) relays the transaction.
    pub async fn transfer(&self, req: TransferRequest) -> Result<TransferResponse> {
        self.wallet_request("transfer", serde_json::to_value(&req)?).await
    }

    /// Same as [`WalletClient::transfer`], but the daemon may split the
    /// payment into several transactions if the amount does not fit one.
    pub async fn transfer_split(&self, req: TransferSplitRequest) -> Result<TransferSplitResponse> {
        self.wallet_request("transfer_split", serde_json::to_value(&req)?).await
    }

    /// Send all dust outputs back to the wallet, to make them easier to
    /// spend and mix. Returns the hashes of the created transactions.
    pub async fn sweep_dust(&self) -> Result<Vec<String>> {
        let rep: SweepDustResponse = self.wallet_request("sweep_dust", json!({})).await?;
        Ok(rep.tx_hash_list)
    }

    /// Send the whole unlocked balance to a single address.
    pub async fn sweep_all(&self, req: SweepAllRequest) -> Result<SweepAllResponse> {
        self.wallet_request("sweep_all", serde_json::to_value(&req)?).await
    }
}
