//! 在庫APIクライアント
//!
//! 認証は `?token=` クエリパラメータで運ぶ。トークンが無い場合も
//! リクエスト自体は発行する（認可の判断はサーバが行う）。
//! このモジュールは表示には一切触れない

use wasm_bindgen::prelude::*;
use web_sys::{Request, RequestInit};

use mixshelf_common::{parser, types::AddItemRequest, Error, Result};

use super::{js_message, response_text, run_fetch};

const INVENTORY_URL: &str = "/inventory/";

/// 一覧取得・追加共通のURLを組み立てる
fn inventory_url(token: Option<&str>) -> String {
    match token {
        Some(token) => format!("{}?token={}", INVENTORY_URL, token),
        None => INVENTORY_URL.to_string(),
    }
}

/// 在庫一覧を取得する
///
/// # Returns
/// * `Ok(Vec<String>)` - サーバ応答順の在庫名
/// * `Err(Error::Network)` - トランスポート失敗
/// * `Err(Error::Server)` - 非成功ステータス
pub async fn fetch_inventory(token: Option<&str>) -> Result<Vec<String>> {
    let request =
        Request::new_with_str(&inventory_url(token)).map_err(|e| Error::Network(js_message(&e)))?;

    let resp = run_fetch(&request).await?;
    if !resp.ok() {
        return Err(Error::Server(resp.status()));
    }

    let body = response_text(&resp).await?;
    parser::parse_inventory_response(&body)
}

/// 在庫に1件追加する
///
/// nameの検証は行わない（空文字もそのまま送り、却下はサーバの責務）
pub async fn add_item(token: Option<&str>, name: &str) -> Result<()> {
    let body = serde_json::to_string(&AddItemRequest {
        name: name.to_string(),
    })?;

    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.body(Some(&JsValue::from_str(&body)));

    let request = Request::new_with_str_and_init(&inventory_url(token), &opts)
        .map_err(|e| Error::Network(js_message(&e)))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| Error::Network(js_message(&e)))?;

    let resp = run_fetch(&request).await?;
    if !resp.ok() {
        return Err(Error::Server(resp.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_url_with_token() {
        assert_eq!(inventory_url(Some("abc")), "/inventory/?token=abc");
    }

    #[test]
    fn test_inventory_url_without_token() {
        // トークン不在でもURLは成立する（クエリを付けないだけ）
        assert_eq!(inventory_url(None), "/inventory/");
    }
}
