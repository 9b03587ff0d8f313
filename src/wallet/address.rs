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
        AddAddressBookResponse, AddressBookEntry, AddressBookResponse, IntegratedAddressResponse,
        MakeUriResponse, ParseUriResponse, PaymentUri, SplitIntegratedAddressResponse,
    },
    Result,
};

impl WalletClient {
    /// Make an integrated address from the wallet address and a payment
    /// id. An empty payment id asks the daemon to generate a random one.
    pub async fn make_integrated_address(&self, payment_id: &str) -> Result<String> {
        let rep: IntegratedAddressResponse = self
            .wallet_request("make_integrated_address", json!({ "payment_id": payment_id }))
            .await?;
        Ok(rep.integrated_address)
    }

    /// Retrieve the standard address and payment id packed in an
    /// integrated address.
    pub async fn split_integrated_address(
        &self,
        integrated_address: &str,
    ) -> Result<SplitIntegratedAddressResponse> {
        self.wallet_request(
            "split_integrated_address",
            json!({ "integrated_address": integrated_address }),
        )
        .await
    }

    /// Create a payment URI from the given fields.
    pub async fn make_uri(&self, uri: &PaymentUri) -> Result<String> {
        let rep: MakeUriResponse =
            self.wallet_request("make_uri", serde_json::to_value(uri)?).await?;
        Ok(rep.uri)
    }

    /// Parse a payment URI back into its fields.
    pub async fn parse_uri(&self, uri: &str) -> Result<PaymentUri> {
        let rep: ParseUriResponse = self.wallet_request("parse_uri", json!({ "uri": uri })).await?;
        Ok(rep.uri)
    }

    /// Retrieve address book entries by index, or all of them when no
    /// index is given.
    pub async fn get_address_book(&self, entries: &[u64]) -> Result<Vec<AddressBookEntry>> {
        let rep: AddressBookResponse =
            self.wallet_request("get_address_book", json!({ "entries": entries })).await?;
        Ok(rep.entries)
    }

    /// Add an entry to the wallet's address book and return the index
    /// the daemon assigned to it.
    pub async fn add_address_book(&self, mut entry: AddressBookEntry) -> Result<u64> {
        // Indices are assigned daemon-side; clear whatever the caller
        // put there so a stale one never goes over the wire.
        entry.index = 0;
        let rep: AddAddressBookResponse =
            self.wallet_request("add_address_book", serde_json::to_value(&entry)?).await?;
        Ok(rep.index)
    }

    /// Delete the address book entry at the given index.
    pub async fn delete_address_book(&self, index: u64) -> Result<()> {
        self.wallet_request_void("delete_address_book", json!({ "index": index })).await
    }
}
