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
        ExportKeyImagesResponse, ImportKeyImagesResponse, SignResponse, SignedKeyImage,
        VerifyResponse,
    },
    Result,
};

impl WalletClient {
    /// Save the wallet file.
    pub async fn store(&self) -> Result<()> {
        self.wallet_request_void("store", json!({})).await
    }

    /// Stop the wallet daemon, storing the wallet file first.
    pub async fn stop_wallet(&self) -> Result<()> {
        self.wallet_request_void("stop_wallet", json!({})).await
    }

    /// Rescan the blockchain from scratch. Destroys any local
    /// transfer metadata such as notes.
    pub async fn rescan_blockchain(&self) -> Result<()> {
        self.wallet_request_void("rescan_blockchain", json!({})).await
    }

    /// Rescan the blockchain for spent outputs only.
    pub async fn rescan_spent(&self) -> Result<()> {
        self.wallet_request_void("rescan_spent", json!({})).await
    }

    /// Attach arbitrary notes to the given transactions, pairwise.
    pub async fn set_tx_notes(&self, txids: &[String], notes: &[String]) -> Result<()> {
        self.wallet_request_void("set_tx_notes", json!({ "txids": txids, "notes": notes })).await
    }

    /// Sign a string with the wallet's spend key.
    pub async fn sign(&self, data: &str) -> Result<String> {
        let rep: SignResponse = self.wallet_request("sign", json!({ "data": data })).await?;
        Ok(rep.signature)
    }

    /// Verify a signature on a string made by the given address.
    pub async fn verify(&self, data: &str, address: &str, signature: &str) -> Result<bool> {
        let params = json!({
            "data": data,
            "address": address,
            "signature": signature,
        });
        let rep: VerifyResponse = self.wallet_request("verify", params).await?;
        Ok(rep.good)
    }

    /// Export the wallet's signed key images.
    pub async fn export_key_images(&self) -> Result<Vec<SignedKeyImage>> {
        let rep: ExportKeyImagesResponse =
            self.wallet_request("export_key_images", json!({})).await?;
        Ok(rep.signed_key_images)
    }

    /// Import signed key images and return the spent status they unlock.
    pub async fn import_key_images(
        &self,
        images: &[SignedKeyImage],
    ) -> Result<ImportKeyImagesResponse> {
        self.wallet_request("import_key_images", json!({ "signed_key_images": images })).await
    }

    /// Start mining in the daemon on behalf of this wallet.
    pub async fn start_mining(
        &self,
        threads_count: u64,
        do_background_mining: bool,
        ignore_battery: bool,
    ) -> Result<()> {
        let params = json!({
            "threads_count": threads_count,
            "do_background_mining": do_background_mining,
            "ignore_battery": ignore_battery,
        });
        self.wallet_request_void("start_mining", params).await
    }

    /// Stop mining in the daemon.
    pub async fn stop_mining(&self) -> Result<()> {
        self.wallet_request_void("stop_mining", json!({})).await
    }

    /// Create a new wallet. Requires the daemon to run with
    /// `--wallet-dir`. The seed language must be one reported by
    /// [`WalletClient::get_languages`].
    pub async fn create_wallet(
        &self,
        filename: &str,
        password: &str,
        language: &str,
    ) -> Result<()> {
        let params = json!({
            "filename": filename,
            "password": password,
            "language": language,
        });
        self.wallet_request_void("create_wallet", params).await
    }

    /// Open a wallet file. Requires the daemon to run with
    /// `--wallet-dir`.
    pub async fn open_wallet(&self, filename: &str, password: &str) -> Result<()> {
        let params = json!({
            "filename": filename,
            "password": password,
        });
        self.wallet_request_void("open_wallet", params).await
    }
}
