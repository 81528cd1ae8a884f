//! APIクライアント
//!
//! fetch実行の共通処理。トランスポート層の失敗はここで
//! `Error::Network` へ写像し、ステータスの解釈は各呼び出し側が行う

pub mod analyze;
pub mod inventory;
pub mod recipes;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, Response};

use mixshelf_common::{Error, Result};

/// JsValueからエラーメッセージを取り出す
pub(crate) fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// fetchを実行してResponseを返す
pub(crate) async fn run_fetch(request: &Request) -> Result<Response> {
    let window =
        web_sys::window().ok_or_else(|| Error::Network("window is unavailable".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(|e| Error::Network(js_message(&e)))?;
    resp_value
        .dyn_into::<Response>()
        .map_err(|_| Error::Network("unexpected fetch result".to_string()))
}

/// レスポンスボディをテキストとして読み出す
pub(crate) async fn response_text(resp: &Response) -> Result<String> {
    let text_promise = resp.text().map_err(|e| Error::Network(js_message(&e)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| Error::Network(js_message(&e)))?;
    Ok(text.as_string().unwrap_or_default())
}
