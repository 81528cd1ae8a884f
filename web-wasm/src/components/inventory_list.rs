//! 在庫リストコンポーネント
//!
//! InventoryViewから表示を丸ごと作り直す。差分描画はしない
//! （リストは小さく、一貫性を優先する）

use leptos::prelude::*;

use mixshelf_common::InventoryView;

#[component]
pub fn InventoryList<F>(view: ReadSignal<InventoryView>, on_select: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="inventory">
            <h2>"在庫リスト"</h2>
            <Show
                when=move || !view.get().is_empty()
                fallback=|| view! { <p class="text-muted">"在庫はまだありません"</p> }
            >
                <ul class="inventory-list">
                    {
                        let on_select = on_select.clone();
                        move || {
                            view.get()
                                .items()
                                .iter()
                                .map(|name| {
                                    let on_select = on_select.clone();
                                    let selected = name.clone();
                                    view! {
                                        <li
                                            class="inventory-item"
                                            on:click=move |_| on_select(selected.clone())
                                        >
                                            {name.clone()}
                                        </li>
                                    }
                                })
                                .collect_view()
                        }
                    }
                </ul>
            </Show>
        </div>
    }
}
