//! カクテル候補コンポーネント
//!
//! 在庫項目を選ぶと候補一覧を出し、候補を選ぶとレシピ詳細を出す

use leptos::prelude::*;

use mixshelf_common::{DrinkDetail, DrinkSummary};

#[component]
pub fn Suggestions<F>(
    suggestions: ReadSignal<Vec<DrinkSummary>>,
    recipe: ReadSignal<Option<DrinkDetail>>,
    on_select_drink: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="suggestions">
            <Show when=move || !suggestions.get().is_empty()>
                <h2>"カクテル候補"</h2>
                <ul class="suggestion-list">
                    {
                        let on_select_drink = on_select_drink.clone();
                        move || {
                            let on_select_drink = on_select_drink.clone();
                            suggestions
                                .get()
                                .iter()
                                .map(|drink| {
                                    let on_select_drink = on_select_drink.clone();
                                    let drink_id = drink.id_drink.clone();
                                    view! {
                                        <li
                                            class="suggestion-item"
                                            on:click=move |_| on_select_drink(drink_id.clone())
                                        >
                                            {drink.str_drink.clone()}
                                        </li>
                                    }
                                })
                                .collect_view()
                        }
                    }
                </ul>
            </Show>

            {move || {
                recipe.get().map(|detail| {
                    view! {
                        <div class="recipe-detail">
                            <h3>{detail.str_drink.clone()}</h3>
                            {detail
                                .str_glass
                                .clone()
                                .map(|glass| view! { <p class="recipe-glass">{glass}</p> })}
                            <p class="recipe-instructions">
                                {detail.str_instructions.clone().unwrap_or_default()}
                            </p>
                        </div>
                    }
                })
            }}
        </div>
    }
}
