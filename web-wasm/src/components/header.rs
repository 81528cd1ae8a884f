//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"MixShelf - 手持ちボトル在庫"</h1>
        </header>
    }
}
