//! ワイヤ型定義
//!
//! WASMクライアントが通信する2つの外部サービスの契約:
//! - 在庫API（同一オリジン）: InventoryResponse / AddItemRequest / LabelsResponse
//! - TheCocktailDB（クロスオリジン）: DrinksResponse / DrinkSummary / DrinkDetail

use serde::{Deserialize, Serialize};

/// GET /inventory/ のレスポンス
///
/// `inventory` が欠けたボディはデシリアライズエラーになる。
/// 欠損を空リスト扱いにすると表示中の在庫を消してしまうため
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryResponse {
    pub inventory: Vec<String>,
}

/// POST /inventory/ のリクエストボディ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddItemRequest {
    pub name: String,
}

/// POST /analyze-image/ のレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelsResponse {
    pub labels: Vec<String>,
}

/// TheCocktailDB filter.php / lookup.php のレスポンス外殻
///
/// 該当なしの場合 `drinks` は null で返る
#[derive(Debug, Clone, Deserialize)]
pub struct DrinksResponse<T> {
    #[serde(default)]
    pub drinks: Option<Vec<T>>,
}

/// filter.php の1件分（候補一覧）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkSummary {
    pub id_drink: String,
    pub str_drink: String,
    #[serde(default)]
    pub str_drink_thumb: Option<String>,
}

/// lookup.php の1件分（レシピ詳細）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkDetail {
    pub id_drink: String,
    pub str_drink: String,
    #[serde(default)]
    pub str_category: Option<String>,
    #[serde(default)]
    pub str_glass: Option<String>,
    #[serde(default)]
    pub str_instructions: Option<String>,
    #[serde(default)]
    pub str_drink_thumb: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_response_deserialize() {
        let json = r#"{"inventory": ["Vodka", "Lime"]}"#;
        let resp: InventoryResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(resp.inventory, vec!["Vodka", "Lime"]);
    }

    #[test]
    fn test_inventory_response_missing_field() {
        // inventoryキー欠損はエラー（空リストに潰さない）
        let json = r#"{"items": []}"#;
        let result = serde_json::from_str::<InventoryResponse>(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_add_item_request_serialize() {
        let req = AddItemRequest {
            name: "Gin".to_string(),
        };
        let json = serde_json::to_string(&req).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"name":"Gin"}"#);
    }

    #[test]
    fn test_add_item_request_empty_name() {
        // 空文字もそのまま通す（検証はサーバ側の責務）
        let req = AddItemRequest {
            name: String::new(),
        };
        let json = serde_json::to_string(&req).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"name":""}"#);
    }

    #[test]
    fn test_labels_response_deserialize() {
        let json = r#"{"labels": ["Bottle", "Gin", "Glass"]}"#;
        let resp: LabelsResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(resp.labels.len(), 3);
        assert_eq!(resp.labels[1], "Gin");
    }

    #[test]
    fn test_drink_summary_deserialize() {
        let json = r#"{
            "strDrink": "Gin Fizz",
            "strDrinkThumb": "https://example.com/ginfizz.jpg",
            "idDrink": "11419"
        }"#;
        let drink: DrinkSummary = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(drink.id_drink, "11419");
        assert_eq!(drink.str_drink, "Gin Fizz");
        assert!(drink.str_drink_thumb.is_some());
    }

    #[test]
    fn test_drinks_response_null() {
        let json = r#"{"drinks": null}"#;
        let resp: DrinksResponse<DrinkSummary> =
            serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(resp.drinks.is_none());
    }

    #[test]
    fn test_drink_detail_nullable_fields() {
        let json = r#"{
            "idDrink": "11419",
            "strDrink": "Gin Fizz",
            "strCategory": null,
            "strInstructions": "Shake all ingredients with ice."
        }"#;
        let detail: DrinkDetail = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(detail.str_category.is_none());
        assert!(detail.str_glass.is_none());
        assert_eq!(
            detail.str_instructions.as_deref(),
            Some("Shake all ingredients with ice.")
        );
    }
}
