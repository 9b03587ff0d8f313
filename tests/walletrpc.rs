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

use async_std::task;
use serde_json::{json, Value};
use tide::{Body, Request, Response};
use url::Url;

use monero_walletrpc::{
    types::{AddressBookEntry, Destination, TransferRequest},
    Config, Error, ErrorCode, Result, WalletClient,
};

const STUB_ADDRESS: &str = "45eoXYNHC4LcL2Hh42T9FMPTmZHyDEwDbgfBEuNj3RZUek8A4og4KiCfVL6ZmvHBfCALnggWtHH7QHF8426yRayLQq7MLf5";

/// Bind a stub wallet daemon to an OS-assigned port and return the
/// endpoint to reach it.
async fn serve(app: tide::Server<()>) -> Url {
    let listener = async_std::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    task::spawn(async move {
        let _ = app.listen(listener).await;
    });

    Url::parse(&format!("http://127.0.0.1:{}/json_rpc", port)).unwrap()
}

fn rpc_ok(req: &Value, result: Value) -> tide::Result {
    let rep = json!({"jsonrpc": "2.0", "id": req["id"].clone(), "result": result});
    Ok(Response::builder(200).body(Body::from_json(&rep)?).build())
}

fn rpc_err(req: &Value, code: i64, message: &str) -> tide::Result {
    let rep = json!({
        "jsonrpc": "2.0",
        "id": req["id"].clone(),
        "error": {"code": code, "message": message},
    });
    Ok(Response::builder(200).body(Body::from_json(&rep)?).build())
}

#[async_std::test]
async fn getaddress_roundtrip() -> Result<()> {
    let mut app = tide::new();
    app.at("/json_rpc").post(|mut req: Request<()>| async move {
        let body: Value = req.body_json().await?;
        assert_eq!(body["jsonrpc"], "2.0");
        assert_eq!(body["method"], "getaddress");
        rpc_ok(&body, json!({ "address": STUB_ADDRESS }))
    });

    let client = WalletClient::new(Config::new(serve(app).await));
    assert_eq!(client.get_address().await?, STUB_ADDRESS);

    Ok(())
}

#[async_std::test]
async fn getbalance_roundtrip() -> Result<()> {
    let mut app = tide::new();
    app.at("/json_rpc").post(|mut req: Request<()>| async move {
        let body: Value = req.body_json().await?;
        assert_eq!(body["method"], "getbalance");
        rpc_ok(
            &body,
            json!({ "balance": 1000000000000u64, "unlocked_balance": 10000000000000u64 }),
        )
    });

    let client = WalletClient::new(Config::new(serve(app).await));
    let (balance, unlocked) = client.get_balance().await?;
    assert_eq!(balance, 1000000000000);
    assert_eq!(unlocked, 10000000000000);

    Ok(())
}

#[async_std::test]
async fn wallet_error_decoding() {
    let mut app = tide::new();
    app.at("/json_rpc").post(|mut req: Request<()>| async move {
        let body: Value = req.body_json().await?;
        rpc_err(&body, -1, "m")
    });

    let client = WalletClient::new(Config::new(serve(app).await));
    let err = client.get_address().await.unwrap_err();

    let we = err.wallet_error().expect("daemon error object should classify as wallet error");
    assert_eq!(we.code, ErrorCode::UnknownError);
    assert_eq!(we.code.code(), -1);
    assert_eq!(we.message, "m");
}

#[async_std::test]
async fn http_status_is_transport_error() {
    let mut app = tide::new();
    app.at("/json_rpc")
        .post(|_req: Request<()>| async move { Ok(Response::builder(500).body("oops").build()) });

    let client = WalletClient::new(Config::new(serve(app).await));
    let err = client.get_height().await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus(500)));
    assert_eq!(err.http_status(), Some(500));
    assert!(err.wallet_error().is_none());
}

#[async_std::test]
async fn reply_id_must_match() {
    let mut app = tide::new();
    app.at("/json_rpc").post(|mut req: Request<()>| async move {
        let body: Value = req.body_json().await?;
        let wrong_id = body["id"].as_u64().unwrap() + 1;
        let rep = json!({"jsonrpc": "2.0", "id": wrong_id, "result": {"height": 1}});
        Ok(Response::builder(200).body(Body::from_json(&rep)?).build())
    });

    let client = WalletClient::new(Config::new(serve(app).await));
    let err = client.get_height().await.unwrap_err();
    assert!(matches!(err, Error::RpcIdMismatch(..)));
}

#[async_std::test]
async fn custom_headers_are_attached() -> Result<()> {
    let mut app = tide::new();
    app.at("/json_rpc").post(|mut req: Request<()>| async move {
        let token =
            req.header("x-wallet-auth").map(|v| v.last().as_str().to_string()).unwrap_or_default();
        let body: Value = req.body_json().await?;
        rpc_ok(&body, json!({ "address": token }))
    });

    let mut config = Config::new(serve(app).await);
    config.custom_headers.insert("x-wallet-auth".to_string(), "swordfish".to_string());

    let client = WalletClient::new(config);
    assert_eq!(client.get_address().await?, "swordfish");

    Ok(())
}

#[async_std::test]
async fn transfer_roundtrip() -> Result<()> {
    let mut app = tide::new();
    app.at("/json_rpc").post(|mut req: Request<()>| async move {
        let body: Value = req.body_json().await?;
        assert_eq!(body["method"], "transfer");

        let params = body["params"].as_object().unwrap();
        assert_eq!(params["destinations"][0]["amount"], 100000000);
        assert_eq!(params["mixin"], 4);
        assert_eq!(params["get_tx_key"], true);
        // Empty payment id stays off the wire
        assert!(!params.contains_key("payment_id"));

        rpc_ok(
            &body,
            json!({
                "fee": 48958481211u64,
                "tx_hash": "985180f468637bc6d2f72ee054e1e34b8d5097988bb29a2e0cb763e4464db23c",
                "tx_key": "7f525c30f753798c4d7d1ae4c76c38e1b277e7d54e49371b4d5da798a091e1f6",
            }),
        )
    });

    let client = WalletClient::new(Config::new(serve(app).await));
    let rep = client
        .transfer(TransferRequest {
            destinations: vec![Destination {
                amount: 100000000,
                address: STUB_ADDRESS.to_string(),
            }],
            mixin: 4,
            get_tx_key: true,
            ..Default::default()
        })
        .await?;

    assert_eq!(rep.fee, 48958481211);
    assert_eq!(rep.tx_hash, "985180f468637bc6d2f72ee054e1e34b8d5097988bb29a2e0cb763e4464db23c");
    assert!(rep.tx_blob.is_empty());

    Ok(())
}

#[async_std::test]
async fn address_book_index_is_zeroed() -> Result<()> {
    let mut app = tide::new();
    app.at("/json_rpc").post(|mut req: Request<()>| async move {
        let body: Value = req.body_json().await?;
        assert_eq!(body["method"], "add_address_book");
        assert_eq!(body["params"]["address"], STUB_ADDRESS);
        // Echo the received index so the client side can verify what
        // actually went over the wire.
        let index = body["params"]["index"].as_u64().unwrap();
        rpc_ok(&body, json!({ "index": index }))
    });

    let client = WalletClient::new(Config::new(serve(app).await));
    let entry = AddressBookEntry {
        index: 7,
        address: STUB_ADDRESS.to_string(),
        description: "donations".to_string(),
        ..Default::default()
    };

    assert_eq!(client.add_address_book(entry).await?, 0);

    Ok(())
}

#[async_std::test]
async fn void_call_parses_reply() -> Result<()> {
    let mut app = tide::new();
    app.at("/json_rpc").post(|mut req: Request<()>| async move {
        let body: Value = req.body_json().await?;
        assert_eq!(body["method"], "store");
        rpc_ok(&body, json!({}))
    });

    let client = WalletClient::new(Config::new(serve(app).await));
    client.store().await?;

    Ok(())
}

#[async_std::test]
async fn void_call_surfaces_wallet_error() {
    let mut app = tide::new();
    app.at("/json_rpc").post(|mut req: Request<()>| async move {
        let body: Value = req.body_json().await?;
        rpc_err(&body, -13, "No wallet file")
    });

    let client = WalletClient::new(Config::new(serve(app).await));
    let err = client.store().await.unwrap_err();

    let we = err.wallet_error().unwrap();
    assert_eq!(we.code, ErrorCode::NotOpen);
    assert_eq!(we.message, "No wallet file");
}
