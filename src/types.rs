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

//! Value records mirroring the wallet daemon's JSON shapes. These are
//! plain data carriers with no identity beyond field equality; every
//! amount is in atomic units.
use serde::{Deserialize, Serialize, Serializer};

fn is_zero(n: &u64) -> bool {
    *n == 0
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Transaction priority accepted by the daemon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    Default,
    Unimportant,
    Normal,
    Elevated,
}

impl Priority {
    pub fn code(&self) -> u64 {
        match *self {
            Self::Default => 0,
            Self::Unimportant => 1,
            Self::Normal => 2,
            Self::Elevated => 3,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Default
    }
}

// The daemon expects priorities as plain integers on the wire.
impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.code())
    }
}

/// Output filter for `incoming_transfers`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GetTransferType {
    /// All the transfers
    All,
    /// Only transfers which are not yet spent
    Available,
    /// Only transfers which are already spent
    Unavailable,
}

/// Key selector for `query_key`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKeyType {
    /// The mnemonic seed
    Mnemonic,
    /// The private view key
    ViewKey,
    /// The private spend key
    SpendKey,
}

/// A transfer destination: public address and amount to send there.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Destination {
    pub amount: u64,
    pub address: String,
}

/// Request body of the `transfer` call.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TransferRequest {
    /// Destinations to receive XMR
    pub destinations: Vec<Destination>,
    /// Ignored by the daemon, the fee is calculated automatically
    #[serde(skip_serializing_if = "is_zero")]
    pub fee: u64,
    /// Number of outputs from the blockchain to mix with (0 means no mixing)
    pub mixin: u64,
    /// Number of blocks before the monero can be spent (0 to not add a lock)
    pub unlock_time: u64,
    /// Random 32-byte/64-character hex string to identify the transaction
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payment_id: String,
    /// Return the transaction key after sending
    pub get_tx_key: bool,
    pub priority: Priority,
    /// If true, the newly created transaction is not relayed to the network
    #[serde(skip_serializing_if = "is_false")]
    pub do_not_relay: bool,
    /// Return the transaction as hex string after sending
    #[serde(skip_serializing_if = "is_false")]
    pub get_tx_hex: bool,
}

/// Successful output of the `transfer` call.
#[derive(Clone, Debug, Deserialize)]
pub struct TransferResponse {
    /// Fee charged for the transaction
    #[serde(default)]
    pub fee: u64,
    /// Publicly searchable transaction hash
    pub tx_hash: String,
    /// Transaction key, set if `get_tx_key` was true
    #[serde(default)]
    pub tx_key: String,
    /// Transaction as hex string, set if `get_tx_hex` was true
    #[serde(default)]
    pub tx_blob: String,
}

/// Request body of the `transfer_split` call. Same shape as
/// [`TransferRequest`] with the split-algorithm switch added.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TransferSplitRequest {
    pub destinations: Vec<Destination>,
    #[serde(skip_serializing_if = "is_zero")]
    pub fee: u64,
    pub mixin: u64,
    pub unlock_time: u64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payment_id: String,
    pub get_tx_keys: bool,
    pub priority: Priority,
    #[serde(skip_serializing_if = "is_false")]
    pub do_not_relay: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub get_tx_hex: bool,
    /// True to use the new transaction construction algorithm
    pub new_algorithm: bool,
}

/// Successful output of the `transfer_split` call.
#[derive(Clone, Debug, Deserialize)]
pub struct TransferSplitResponse {
    #[serde(default)]
    pub tx_hash_list: Vec<String>,
    #[serde(default)]
    pub tx_key_list: Vec<String>,
    #[serde(default)]
    pub tx_blob_list: Vec<String>,
    #[serde(default)]
    pub amount_list: Vec<u64>,
    #[serde(default)]
    pub fee_list: Vec<u64>,
}

/// Request body of the `sweep_all` call.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SweepAllRequest {
    /// Destination public address
    pub address: String,
    pub priority: Priority,
    pub mixin: u64,
    pub unlock_time: u64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payment_id: String,
    pub get_tx_keys: bool,
    /// Include outputs below this amount
    #[serde(skip_serializing_if = "is_zero")]
    pub below_amount: u64,
    #[serde(skip_serializing_if = "is_false")]
    pub do_not_relay: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub get_tx_hex: bool,
}

/// Successful output of the `sweep_all` call.
#[derive(Clone, Debug, Deserialize)]
pub struct SweepAllResponse {
    #[serde(default)]
    pub tx_hash_list: Vec<String>,
    #[serde(default)]
    pub tx_key_list: Vec<String>,
    #[serde(default)]
    pub tx_blob_list: Vec<String>,
}

/// A payment received by the wallet.
#[derive(Clone, Debug, Deserialize)]
pub struct Payment {
    pub payment_id: String,
    pub tx_hash: String,
    pub amount: u64,
    #[serde(default)]
    pub block_height: u64,
    #[serde(default)]
    pub unlock_time: u64,
}

/// An output owned by the wallet, as listed by `incoming_transfers`.
#[derive(Clone, Debug, Deserialize)]
pub struct IncomingTransfer {
    pub amount: u64,
    pub spent: bool,
    #[serde(default)]
    pub global_index: u64,
    pub tx_hash: String,
    #[serde(default)]
    pub tx_size: u64,
}

/// An entry of the wallet's transfer history, as listed by
/// `get_transfers` and `get_transfer_by_txid`. Field availability
/// depends on the transfer direction, absent fields decode to defaults.
#[derive(Clone, Debug, Deserialize)]
pub struct Transfer {
    #[serde(default)]
    pub txid: String,
    #[serde(default)]
    pub payment_id: String,
    #[serde(default)]
    pub height: u64,
    #[serde(default)]
    pub timestamp: u64,
    pub amount: u64,
    #[serde(default)]
    pub fee: u64,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub destinations: Vec<Destination>,
    /// Direction bucket the daemon placed this entry in
    #[serde(rename = "type", default)]
    pub transfer_type: String,
    #[serde(default)]
    pub unlock_time: u64,
    #[serde(default)]
    pub double_spend_seen: bool,
}

/// Request body of the `get_transfers` call. Each flag selects one
/// direction bucket of the wallet's history.
#[derive(Clone, Debug, Default, Serialize)]
pub struct GetTransfersRequest {
    #[serde(rename = "in")]
    pub incoming: bool,
    #[serde(rename = "out")]
    pub outgoing: bool,
    pub pending: bool,
    pub failed: bool,
    pub pool: bool,
    pub filter_by_height: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub min_height: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub max_height: u64,
}

/// Successful output of the `get_transfers` call.
#[derive(Clone, Debug, Deserialize)]
pub struct GetTransfersResponse {
    #[serde(rename = "in", default)]
    pub incoming: Vec<Transfer>,
    #[serde(rename = "out", default)]
    pub outgoing: Vec<Transfer>,
    #[serde(default)]
    pub pending: Vec<Transfer>,
    #[serde(default)]
    pub failed: Vec<Transfer>,
    #[serde(default)]
    pub pool: Vec<Transfer>,
}

/// A signed key image, exported by `export_key_images` and accepted by
/// `import_key_images`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignedKeyImage {
    pub key_image: String,
    pub signature: String,
}

/// Successful output of the `import_key_images` call.
#[derive(Clone, Debug, Deserialize)]
pub struct ImportKeyImagesResponse {
    pub height: u64,
    /// Amount spent from the imported key images
    pub spent: u64,
    /// Amount still spendable
    pub unspent: u64,
}

/// An address book entry. The daemon assigns the index.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AddressBookEntry {
    #[serde(default)]
    pub index: u64,
    pub address: String,
    #[serde(default)]
    pub payment_id: String,
    #[serde(default)]
    pub description: String,
}

/// A payment URI, as built by `make_uri` and decoded by `parse_uri`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PaymentUri {
    pub address: String,
    #[serde(default)]
    pub amount: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub payment_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub recipient_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tx_description: String,
}

// Per-method result shells. The client methods unwrap the single-field
// ones into plain return values.

#[derive(Clone, Debug, Deserialize)]
pub struct BalanceResponse {
    pub balance: u64,
    pub unlocked_balance: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AddressResponse {
    pub address: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct HeightResponse {
    pub height: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct QueryKeyResponse {
    pub key: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PaymentsResponse {
    #[serde(default)]
    pub payments: Vec<Payment>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct IncomingTransfersResponse {
    #[serde(default)]
    pub transfers: Vec<IncomingTransfer>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TransferByTxidResponse {
    pub transfer: Transfer,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TxNotesResponse {
    #[serde(default)]
    pub notes: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LanguagesResponse {
    #[serde(default)]
    pub languages: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SweepDustResponse {
    #[serde(default)]
    pub tx_hash_list: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct IntegratedAddressResponse {
    pub integrated_address: String,
}

/// Successful output of the `split_integrated_address` call.
#[derive(Clone, Debug, Deserialize)]
pub struct SplitIntegratedAddressResponse {
    pub standard_address: String,
    pub payment_id: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MakeUriResponse {
    pub uri: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ParseUriResponse {
    pub uri: PaymentUri,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AddressBookResponse {
    #[serde(default)]
    pub entries: Vec<AddressBookEntry>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AddAddressBookResponse {
    pub index: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SignResponse {
    pub signature: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct VerifyResponse {
    pub good: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ExportKeyImagesResponse {
    #[serde(default)]
    pub signed_key_images: Vec<SignedKeyImage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_request_wire_form() {
        let req = TransferRequest {
            destinations: vec![Destination {
                amount: 100000000,
                address: "9wNgSYy2F9qPZu7KBjvsFgZLTKE2TZgEpNFbGka9gA5zPmAXS35QzzYaLKJRkYTnzgArGNX7TvSqZC87tBLwtaC5RQgJ8rm".to_string(),
            }],
            mixin: 4,
            get_tx_key: true,
            ..Default::default()
        };

        let v = serde_json::to_value(&req).unwrap();
        let obj = v.as_object().unwrap();

        assert_eq!(v["destinations"][0]["amount"], 100000000);
        assert_eq!(v["mixin"], 4);
        assert_eq!(v["priority"], 0);
        // Empty optionals stay off the wire
        assert!(!obj.contains_key("payment_id"));
        assert!(!obj.contains_key("fee"));
        assert!(!obj.contains_key("do_not_relay"));
    }

    #[test]
    fn enum_wire_forms() {
        assert_eq!(serde_json::to_value(GetTransferType::All).unwrap(), "all");
        assert_eq!(serde_json::to_value(GetTransferType::Unavailable).unwrap(), "unavailable");
        assert_eq!(serde_json::to_value(QueryKeyType::ViewKey).unwrap(), "view_key");
        assert_eq!(serde_json::to_value(QueryKeyType::Mnemonic).unwrap(), "mnemonic");
        assert_eq!(serde_json::to_value(Priority::Elevated).unwrap(), 3);
    }

    #[test]
    fn transfer_direction_buckets() {
        let rep = r#"{
            "in": [{"txid": "a", "amount": 5, "type": "in", "timestamp": 1535918400}],
            "pool": [{"amount": 7, "type": "pool"}]
        }"#;

        let rep: GetTransfersResponse = serde_json::from_str(rep).unwrap();
        assert_eq!(rep.incoming.len(), 1);
        assert_eq!(rep.incoming[0].txid, "a");
        assert_eq!(rep.incoming[0].transfer_type, "in");
        assert_eq!(rep.pool[0].amount, 7);
        assert!(rep.outgoing.is_empty() && rep.pending.is_empty() && rep.failed.is_empty());

        // Round out a full entry to make sure nothing requires the
        // direction-specific fields.
        let lone: Transfer = serde_json::from_value(serde_json::json!({
            "amount": 1, "destinations": [{"amount": 1, "address": "x"}]
        }))
        .unwrap();
        assert_eq!(lone.destinations.len(), 1);
        assert!(!lone.double_spend_seen);
    }
}
