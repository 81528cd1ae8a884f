//! 手入力コンポーネント
//!
//! テキスト入力と追加ボタン。入力値の検証は行わない
//! （空文字の却下はサーバの責務）

use leptos::prelude::*;

#[component]
pub fn ManualEntry<F>(on_submit: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone,
{
    let (name, set_name) = signal(String::new());

    let on_click = {
        let on_submit = on_submit.clone();
        move |_| {
            on_submit(name.get_untracked());
            set_name.set(String::new());
        }
    };

    view! {
        <div class="manual-entry">
            <input
                type="text"
                placeholder="材料名を入力..."
                prop:value=move || name.get()
                on:input=move |ev| {
                    set_name.set(event_target_value(&ev));
                }
            />
            <button class="btn btn-primary" on:click=on_click>
                "追加"
            </button>
        </div>
    }
}
