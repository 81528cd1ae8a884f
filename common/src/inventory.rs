//! 在庫ビューの状態管理
//!
//! 描画される在庫リストの唯一の持ち主。3つの入力経路（手入力・
//! バーコード・画像解析）がどう動いても、ここを通った取得結果
//! だけが表示に反映される

use crate::error::Result;

/// クライアントが保持する在庫スナップショット
///
/// 不変条件: 項目列は常に「最後に完了した取得」の内容と一致する。
/// 部分更新や並べ替えは行わず、成功時に丸ごと置換する
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryView {
    items: Vec<String>,
}

impl InventoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// 現在の項目列（サーバ応答順）
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 取得結果をビューへ反映する
    ///
    /// 成功時は項目列を丸ごと置換する。失敗時は項目列に触れず
    /// エラーをそのまま返す（直前の表示を維持し、取得失敗で
    /// リストが空になることはない）
    pub fn apply_fetch(&mut self, fetched: Result<Vec<String>>) -> Result<()> {
        let items = fetched?;
        self.items = items;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_apply_fetch_replaces_wholesale() {
        let mut view = InventoryView::new();
        view.apply_fetch(Ok(vec!["Vodka".to_string(), "Lime".to_string()]))
            .unwrap();
        assert_eq!(view.items(), ["Vodka", "Lime"]);

        // 2回目も差分ではなく置換
        view.apply_fetch(Ok(vec!["Gin".to_string()])).unwrap();
        assert_eq!(view.items(), ["Gin"]);
    }

    #[test]
    fn test_apply_fetch_preserves_server_order() {
        let mut view = InventoryView::new();
        view.apply_fetch(Ok(vec![
            "Whiskey".to_string(),
            "Brandy".to_string(),
            "Rum".to_string(),
        ]))
        .unwrap();
        assert_eq!(view.items(), ["Whiskey", "Brandy", "Rum"]);
    }

    #[test]
    fn test_apply_fetch_failure_keeps_previous_view() {
        let mut view = InventoryView::new();
        view.apply_fetch(Ok(vec!["Vodka".to_string()])).unwrap();

        let before = view.clone();
        let result = view.apply_fetch(Err(Error::Network("offline".to_string())));

        assert!(result.is_err());
        assert_eq!(view, before);
    }

    #[test]
    fn test_apply_fetch_failure_on_empty_view() {
        let mut view = InventoryView::new();
        let result = view.apply_fetch(Err(Error::Server(500)));

        assert!(matches!(result, Err(Error::Server(500))));
        assert!(view.is_empty());
    }

    #[test]
    fn test_apply_fetch_empty_success_clears_view() {
        // 空リストでの成功は有効な状態（サーバが正）
        let mut view = InventoryView::new();
        view.apply_fetch(Ok(vec!["Vodka".to_string()])).unwrap();
        view.apply_fetch(Ok(vec![])).unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn test_apply_fetch_keeps_duplicates() {
        let mut view = InventoryView::new();
        view.apply_fetch(Ok(vec!["Gin".to_string(), "Gin".to_string()]))
            .unwrap();
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_last_completed_fetch_wins() {
        // 同時に飛んだ2つのrefreshは完了順に適用され、後勝ちになる
        let mut view = InventoryView::new();
        view.apply_fetch(Ok(vec!["Vodka".to_string(), "Lime".to_string()]))
            .unwrap();
        view.apply_fetch(Ok(vec!["Vodka".to_string()])).unwrap();
        assert_eq!(view.items(), ["Vodka"]);
    }
}
