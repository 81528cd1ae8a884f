//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// クライアントが遭遇する失敗の分類:
/// - Network: トランスポート層の失敗（オフライン等）
/// - Server: 在庫APIの非成功ステータス
/// - CaptureInit: カメラが使えない（権限拒否・非対応デバイス）
/// - Analysis: ラベル解析エンドポイントの失敗
/// - Recipe: カクテルDB照会の失敗
/// - Parse / Json: レスポンスボディの解析失敗
#[derive(Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: status {0}")]
    Server(u16),

    #[error("Camera init error: {0}")]
    CaptureInit(String),

    #[error("Image analysis error: {0}")]
    Analysis(String),

    #[error("Recipe lookup error: {0}")]
    Recipe(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_network() {
        let error = Error::Network("connection refused".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Network error"));
        assert!(display.contains("connection refused"));
    }

    #[test]
    fn test_error_display_server() {
        let error = Error::Server(503);
        assert_eq!(format!("{}", error), "Server error: status 503");
    }

    #[test]
    fn test_error_display_capture_init() {
        let error = Error::CaptureInit("カメラ権限が拒否されました".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Camera init error"));
        assert!(display.contains("カメラ権限が拒否されました"));
    }

    #[test]
    fn test_error_display_analysis() {
        let error = Error::Analysis("status 413".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Image analysis error"));
        assert!(display.contains("413"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Recipe("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Recipe"));
        assert!(debug.contains("テスト"));
    }
}
