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
        AddressResponse, BalanceResponse, GetTransferType, GetTransfersRequest,
        GetTransfersResponse, HeightResponse, IncomingTransfer, IncomingTransfersResponse,
        LanguagesResponse, Payment, PaymentsResponse, QueryKeyResponse, QueryKeyType, Transfer,
        TransferByTxidResponse, TxNotesResponse,
    },
    Result,
};

impl WalletClient {
    /// Return the wallet's total and unlocked balance, in atomic units.
    pub async fn get_balance(&self) -> Result<(u64, u64)> {
        let rep: BalanceResponse = self.wallet_request("getbalance", json!({})).await?;
        Ok((rep.balance, rep.unlocked_balance))
    }

    /// Return the wallet's address, the 95-character hex address string
    /// of the wallet in session.
    pub async fn get_address(&self) -> Result<String> {
        let rep: AddressResponse = self.wallet_request("getaddress", json!({})).await?;
        Ok(rep.address)
    }

    /// Return the wallet's current block height. A wallet that has been
    /// offline for a long time may still need to catch up with the daemon.
    pub async fn get_height(&self) -> Result<u64> {
        let rep: HeightResponse = self.wallet_request("getheight", json!({})).await?;
        Ok(rep.height)
    }

    /// Return the wallet's secret of the requested kind.
    pub async fn query_key(&self, key_type: QueryKeyType) -> Result<String> {
        let rep: QueryKeyResponse =
            self.wallet_request("query_key", json!({ "key_type": key_type })).await?;
        Ok(rep.key)
    }

    /// Get a list of incoming payments using a given payment id.
    pub async fn get_payments(&self, payment_id: &str) -> Result<Vec<Payment>> {
        let rep: PaymentsResponse =
            self.wallet_request("get_payments", json!({ "payment_id": payment_id })).await?;
        Ok(rep.payments)
    }

    /// Get a list of incoming payments for any of the given payment ids
    /// from the given height. This is the preferred lookup when the
    /// height is known, as it scans blocks instead of the full wallet.
    pub async fn get_bulk_payments(
        &self,
        payment_ids: &[String],
        min_block_height: u64,
    ) -> Result<Vec<Payment>> {
        let params = json!({
            "payment_ids": payment_ids,
            "min_block_height": min_block_height,
        });
        let rep: PaymentsResponse = self.wallet_request("get_bulk_payments", params).await?;
        Ok(rep.payments)
    }

    /// Return a list of the wallet's outputs, filtered by spent state.
    pub async fn incoming_transfers(
        &self,
        transfer_type: GetTransferType,
    ) -> Result<Vec<IncomingTransfer>> {
        let rep: IncomingTransfersResponse = self
            .wallet_request("incoming_transfers", json!({ "transfer_type": transfer_type }))
            .await?;
        Ok(rep.transfers)
    }

    /// Return the wallet's transfer history, bucketed by direction
    /// according to the request's flags.
    pub async fn get_transfers(&self, req: GetTransfersRequest) -> Result<GetTransfersResponse> {
        self.wallet_request("get_transfers", serde_json::to_value(&req)?).await
    }

    /// Look up a single transfer of the wallet by transaction id.
    pub async fn get_transfer_by_txid(&self, txid: &str) -> Result<Transfer> {
        let rep: TransferByTxidResponse =
            self.wallet_request("get_transfer_by_txid", json!({ "txid": txid })).await?;
        Ok(rep.transfer)
    }

    /// Return notes for the given transactions, in the same order.
    pub async fn get_tx_notes(&self, txids: &[String]) -> Result<Vec<String>> {
        let rep: TxNotesResponse =
            self.wallet_request("get_tx_notes", json!({ "txids": txids })).await?;
        Ok(rep.notes)
    }

    /// Return the list of seed languages the daemon can create wallets in.
    pub async fn get_languages(&self) -> Result<Vec<String>> {
        let rep: LanguagesResponse = self.wallet_request("get_languages", json!({})).await?;
        Ok(rep.languages)
    }
}
