//! メインアプリケーションコンポーネント
//!
//! 在庫シンクロナイザ。3つの入力経路（手入力・バーコード・画像解析）
//! のイベントを1箇所で受け、在庫APIを駆動して表示を作り直す。
//! 描画される在庫リストの状態を持つのはこのコンポーネントだけ

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::{
    analyze_panel::AnalyzePanel, header::Header, inventory_list::InventoryList,
    manual_entry::ManualEntry, scanner_view::ScannerView, suggestions::Suggestions,
};
use crate::session;
use mixshelf_common::{DrinkDetail, DrinkSummary, InventoryView};

/// 在庫を取得してビューへ反映する
///
/// 成功時は丸ごと置換、失敗時は直前の表示を維持してステータスに出す。
/// 同時に飛んだ取得は完了順に適用される（後勝ち。順序保証も
/// キャンセルもしない）
async fn refresh_inventory(
    token: Option<String>,
    set_view: WriteSignal<InventoryView>,
    set_status: WriteSignal<String>,
) {
    let fetched = api::inventory::fetch_inventory(token.as_deref()).await;

    let mut failed = None;
    set_view.update(|view| {
        if let Err(e) = view.apply_fetch(fetched) {
            failed = Some(e);
        }
    });

    match failed {
        Some(e) => {
            gloo::console::error!(format!("在庫の取得に失敗: {}", e));
            set_status.set(format!("在庫を取得できませんでした: {}", e));
        }
        None => set_status.set(String::new()),
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // セッショントークンは起動時に一度だけ読む。無くても各操作は
    // そのまま通す（認可はサーバの判断）
    let token = session::token();

    // アプリケーション状態
    let (view, set_view) = signal(InventoryView::new());
    let (status, set_status) = signal(String::new());
    let (labels, set_labels) = signal(Vec::<String>::new());
    let (suggestions, set_suggestions) = signal(Vec::<DrinkSummary>::new());
    let (recipe, set_recipe) = signal(None::<DrinkDetail>);

    // 初回表示
    {
        let token = token.clone();
        spawn_local(async move {
            refresh_inventory(token, set_view, set_status).await;
        });
    }

    // 手入力ハンドラ
    let on_submit = {
        let token = token.clone();
        move |name: String| {
            let token = token.clone();
            spawn_local(async move {
                // 追加の成否は区別せず、必ずリフレッシュする
                if let Err(e) = api::inventory::add_item(token.as_deref(), &name).await {
                    gloo::console::error!(format!("追加に失敗: {}", e));
                }
                refresh_inventory(token, set_view, set_status).await;
            });
        }
    };

    // バーコード検出ハンドラ。通知のみで在庫には触れない
    // （ペイロードから材料名への解決は今後の拡張点）
    let on_barcode = move |code: String| {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&format!("バーコードを検出しました: {}", code));
        }
    };

    // 画像解析ハンドラ。失敗はアラートで通知し、在庫表示には影響しない
    let on_analyze = move |file: web_sys::File| {
        spawn_local(async move {
            match api::analyze::analyze(file).await {
                Ok(found) => set_labels.set(found),
                Err(e) => {
                    gloo::console::error!(format!("画像解析に失敗: {}", e));
                    if let Some(window) = web_sys::window() {
                        let _ =
                            window.alert_with_message(&format!("画像解析に失敗しました: {}", e));
                    }
                }
            }
        });
    };

    // 在庫項目の選択 → カクテル候補の取得
    let on_select_item = move |name: String| {
        spawn_local(async move {
            match api::recipes::suggest_drinks(&name).await {
                Ok(drinks) => {
                    set_recipe.set(None);
                    set_suggestions.set(drinks);
                }
                Err(e) => set_status.set(format!("カクテル候補を取得できませんでした: {}", e)),
            }
        });
    };

    // 候補の選択 → レシピ詳細の取得
    let on_select_drink = move |drink_id: String| {
        spawn_local(async move {
            match api::recipes::fetch_recipe_details(&drink_id).await {
                Ok(detail) => set_recipe.set(Some(detail)),
                Err(e) => set_status.set(format!("レシピを取得できませんでした: {}", e)),
            }
        });
    };

    view! {
        <div class="container">
            <Header />

            <ManualEntry on_submit=on_submit />

            <ScannerView on_detect=on_barcode />

            <AnalyzePanel labels=labels on_analyze=on_analyze />

            <Show when=move || !status.get().is_empty()>
                <p class="status-message">{move || status.get()}</p>
            </Show>

            <InventoryList view=view on_select=on_select_item />

            <Suggestions
                suggestions=suggestions
                recipe=recipe
                on_select_drink=on_select_drink
            />
        </div>
    }
}
