//! All-types modal component
//!
//! Lists the full ten-entry catalog so users can browse every type.

use leptos::prelude::*;

use ksnackface_common::snack_types;

#[component]
pub fn AllTypesModal<F>(english: ReadSignal<bool>, on_close: F) -> impl IntoView
where
    F: Fn() + 'static + Copy,
{
    let entries = snack_types()
        .iter()
        .map(|t| {
            view! {
                <div class="type-entry">
                    <h3 class=format!("type-title {}", t.color_class)>
                        {move || if english.get() {
                            format!("{}. {} — {}", t.id, t.snack_en, t.vibe_en)
                        } else {
                            format!("{}. {} — {}", t.id, t.snack, t.vibe)
                        }}
                    </h3>
                    <p class="type-stars text-muted">
                        {move || if english.get() { t.stars_en } else { t.stars }}
                    </p>
                    <p class="type-definition">
                        {move || if english.get() { t.definition_en } else { t.definition }}
                    </p>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close()>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>
                        {move || if english.get() { "All K-snack types" } else { "전체 K-과자 유형" }}
                    </h2>
                    <button class="btn-ghost" on:click=move |_| on_close()>"✕"</button>
                </div>
                <div class="modal-body">{entries}</div>
            </div>
        </div>
    }
}
