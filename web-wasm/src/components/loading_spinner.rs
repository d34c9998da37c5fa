//! Loading spinner component

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(english: ReadSignal<bool>) -> impl IntoView {
    view! {
        <div class="spinner-container">
            <div class="spinner" />
            <p class="spinner-text">
                {move || if english.get() {
                    "Analyzing your face..."
                } else {
                    "얼굴을 분석하고 있습니다..."
                }}
            </p>
        </div>
    }
}
