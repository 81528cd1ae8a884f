//! APIレスポンスパーサー
//!
//! WASM側はfetchでボディ文字列を取り出すだけにして、
//! 型付けと検証はここで行う（ネイティブでテスト可能にするため）

use crate::error::{Error, Result};
use crate::types::{DrinkDetail, DrinkSummary, DrinksResponse, InventoryResponse, LabelsResponse};

/// 在庫一覧レスポンスをパース
///
/// サーバ応答順をそのまま保持した在庫名のリストを返す
///
/// # Arguments
/// * `body` - GET /inventory/ のレスポンスボディ
///
/// # Returns
/// * `Ok(Vec<String>)` - パース成功
/// * `Err(Error::Parse)` - ボディが契約と一致しない場合
///
/// # Examples
/// ```
/// use mixshelf_common::parse_inventory_response;
///
/// let body = r#"{"inventory": ["Vodka", "Lime"]}"#;
/// let items = parse_inventory_response(body).unwrap();
/// assert_eq!(items, vec!["Vodka", "Lime"]);
/// ```
pub fn parse_inventory_response(body: &str) -> Result<Vec<String>> {
    let resp: InventoryResponse = serde_json::from_str(body)
        .map_err(|e| Error::Parse(format!("在庫レスポンスの解析に失敗: {}", e)))?;
    Ok(resp.inventory)
}

/// 画像解析レスポンスをパース
///
/// # Arguments
/// * `body` - POST /analyze-image/ のレスポンスボディ
///
/// # Returns
/// * `Ok(Vec<String>)` - 検出ラベルのリスト
/// * `Err(Error::Parse)` - ボディが契約と一致しない場合
pub fn parse_labels_response(body: &str) -> Result<Vec<String>> {
    let resp: LabelsResponse = serde_json::from_str(body)
        .map_err(|e| Error::Parse(format!("ラベルレスポンスの解析に失敗: {}", e)))?;
    Ok(resp.labels)
}

/// filter.php レスポンスをパース
///
/// 該当なし（`drinks: null`）は空リストとして返す
pub fn parse_drinks_response(body: &str) -> Result<Vec<DrinkSummary>> {
    let resp: DrinksResponse<DrinkSummary> = serde_json::from_str(body)
        .map_err(|e| Error::Parse(format!("カクテル候補の解析に失敗: {}", e)))?;
    Ok(resp.drinks.unwrap_or_default())
}

/// lookup.php レスポンスをパース
///
/// 先頭の1件をレシピ詳細として返す。該当なしは `Error::Recipe`
pub fn parse_recipe_response(body: &str) -> Result<DrinkDetail> {
    let resp: DrinksResponse<DrinkDetail> = serde_json::from_str(body)
        .map_err(|e| Error::Parse(format!("レシピ詳細の解析に失敗: {}", e)))?;
    resp.drinks
        .and_then(|mut drinks| {
            if drinks.is_empty() {
                None
            } else {
                Some(drinks.remove(0))
            }
        })
        .ok_or_else(|| Error::Recipe("レシピが見つかりません".to_string()))
}
