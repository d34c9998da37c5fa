//! Header component

use leptos::prelude::*;

#[component]
pub fn Header<F, G>(
    english: ReadSignal<bool>,
    set_english: WriteSignal<bool>,
    on_show_all_types: F,
    on_reset: G,
) -> impl IntoView
where
    F: Fn() + 'static + Copy,
    G: Fn() + 'static + Copy,
{
    view! {
        <header class="header">
            <span class="header-title" on:click=move |_| on_reset()>
                {move || if english.get() { "K-snack face test" } else { "K-과자 유형 테스트" }}
            </span>
            <nav class="header-nav">
                <button class="btn-ghost" on:click=move |_| on_show_all_types()>
                    {move || if english.get() { "All types" } else { "전체 유형 보기" }}
                </button>
                <button
                    class="btn-ghost"
                    on:click=move |_| set_english.update(|e| *e = !*e)
                >
                    {move || if english.get() { "한국어" } else { "English" }}
                </button>
            </nav>
        </header>
    }
}
