//! 画像解析クライアント
//!
//! 選択された画像をmultipartで送信し、検出ラベルを返す。
//! ラベルは情報提供のみで、在庫への自動追加は行わない

use web_sys::{FormData, Request, RequestInit};

use mixshelf_common::{parser, Error, Result};

use super::{js_message, response_text, run_fetch};

const ANALYZE_URL: &str = "/analyze-image/";

/// 画像を解析エンドポイントへ送信する
///
/// # Returns
/// * `Ok(Vec<String>)` - 検出ラベル
/// * `Err(Error::Analysis)` - エンドポイントの非成功ステータス
/// * `Err(Error::Network)` - トランスポート失敗
pub async fn analyze(file: web_sys::File) -> Result<Vec<String>> {
    let form = FormData::new().map_err(|e| Error::Analysis(js_message(&e)))?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|e| Error::Analysis(js_message(&e)))?;

    let mut opts = RequestInit::new();
    opts.method("POST");
    // Content-Typeは指定しない（境界付きmultipartをブラウザが設定する）
    opts.body(Some(form.as_ref()));

    let request = Request::new_with_str_and_init(ANALYZE_URL, &opts)
        .map_err(|e| Error::Network(js_message(&e)))?;

    let resp = run_fetch(&request).await?;
    if !resp.ok() {
        return Err(Error::Analysis(format!("status {}", resp.status())));
    }

    let body = response_text(&resp).await?;
    parser::parse_labels_response(&body)
}
