//! 画像解析パネルコンポーネント
//!
//! 画像選択と解析実行、検出ラベルの表示。既知スピリッツに
//! 一致したラベルは強調する。検出結果から在庫への自動追加は
//! 行わない（誤検出の混入を避ける）

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use mixshelf_common::is_known_spirit;

const FILE_INPUT_ID: &str = "analyze-file";

#[component]
pub fn AnalyzePanel<F>(labels: ReadSignal<Vec<String>>, on_analyze: F) -> impl IntoView
where
    F: Fn(web_sys::File) + 'static + Clone,
{
    let on_click = {
        let on_analyze = on_analyze.clone();
        move |_| {
            let input: HtmlInputElement = web_sys::window()
                .unwrap()
                .document()
                .unwrap()
                .get_element_by_id(FILE_INPUT_ID)
                .unwrap()
                .dyn_into()
                .unwrap();

            // 未選択なら何もしない
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_analyze(file);
            }
        }
    };

    view! {
        <div class="analyze-panel">
            <input type="file" id=FILE_INPUT_ID accept="image/*" />
            <button class="btn btn-secondary" on:click=on_click>
                "ラベルを解析"
            </button>

            <Show when=move || !labels.get().is_empty()>
                <ul class="label-list">
                    {move || {
                        labels
                            .get()
                            .iter()
                            .map(|label| {
                                let known = is_known_spirit(label);
                                view! {
                                    <li class="label-item" class:known-spirit=known>
                                        {label.clone()}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}
