//! セッションコンテキスト
//!
//! 永続ストレージからベアラトークンを読むだけの純粋アクセサ。
//! ページロード以降のライフサイクルは持たず、書き込みも行わない

const TOKEN_KEY: &str = "token";

/// セッショントークンを返す。未設定はNone（エラーではない）
///
/// トークンが無くてもAPI呼び出し自体は行われ、認可の判断は
/// サーバに委ねる
pub fn token() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(TOKEN_KEY).ok()?
}
