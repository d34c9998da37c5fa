//! Main application component
//!
//! Owns the one `Session` value driving the whole flow:
//! Idle -> Analyzing -> Success | Failed -> (reset) -> Idle.
//! No other component mutates session state.

use leptos::prelude::*;

use ksnackface_common::{Phase, Session};

use crate::api::client;
use crate::components::{
    all_types_modal::AllTypesModal, header::Header, loading_spinner::LoadingSpinner,
    result_display::ResultDisplay, upload_area::UploadArea,
};

/// Generic user-facing failure message; raw detail goes to the console
fn failure_message(english: bool) -> String {
    if english {
        "Something went wrong during analysis. Please try again later.".to_string()
    } else {
        "분석 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요.".to_string()
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (session, set_session) = signal(Session::new());
    let (english, set_english) = signal(false);
    let (show_all_types, set_show_all_types) = signal(false);

    // a valid image was selected: enter Analyzing and fire the one call.
    // The completion carries the attempt tag, so a response landing
    // after a reset or a newer selection is dropped by the session.
    let on_image_selected = move |data_url: String| {
        let mut attempt = 0;
        set_session.update(|s| attempt = s.begin(data_url.clone()));
        leptos::task::spawn_local(async move {
            match client::analyze_via_relay(&data_url).await {
                Ok(result) => set_session.update(|s| s.succeed(attempt, result)),
                Err(err) => {
                    gloo::console::error!("analysis failed:", err);
                    let message = failure_message(english.get_untracked());
                    set_session.update(|s| s.fail(attempt, message));
                }
            }
        });
    };

    // a non-image file never reaches the network; no attempt is started
    let on_file_rejected = move |mime: String| {
        gloo::console::warn!("rejected non-image upload:", mime);
        let message = failure_message(english.get_untracked());
        set_session.update(|s| s.reject(message));
    };

    let on_reset = move || set_session.update(|s| s.reset());

    view! {
        <div class="app">
            <Header
                english=english
                set_english=set_english
                on_show_all_types=move || set_show_all_types.set(true)
                on_reset=on_reset
            />

            <main class="main">
                <div class="intro">
                    <h1>
                        {move || if english.get() { "K-snack face test" } else { "K-과자 유형 테스트" }}
                    </h1>
                    <p class="text-muted">
                        {move || if english.get() {
                            "Which K-snack does your face match?"
                        } else {
                            "당신의 얼굴은 어떤 K-과자상일까요?"
                        }}
                    </p>
                </div>

                {move || match session.get().phase().clone() {
                    Phase::Idle => view! {
                        <UploadArea
                            english=english
                            on_image_selected=on_image_selected
                            on_file_rejected=on_file_rejected
                        />
                    }
                    .into_any(),
                    Phase::Analyzing => {
                        let image_url = session
                            .get_untracked()
                            .image_url()
                            .unwrap_or_default()
                            .to_string();
                        view! {
                            <div class="analyzing">
                                <div class="result-photo">
                                    <img src=image_url alt="selected face" />
                                </div>
                                <LoadingSpinner english=english />
                            </div>
                        }
                        .into_any()
                    }
                    Phase::Failed(message) => view! {
                        <div class="error-panel">
                            <p class="error-text">{message}</p>
                            <button class="btn" on:click=move |_| on_reset()>
                                {move || if english.get() { "Start over" } else { "다시 시작하기" }}
                            </button>
                        </div>
                    }
                    .into_any(),
                    Phase::Success(result) => {
                        let image_url = session
                            .get_untracked()
                            .image_url()
                            .unwrap_or_default()
                            .to_string();
                        view! {
                            <ResultDisplay
                                result=result
                                image_url=image_url
                                english=english
                                on_reset=on_reset
                            />
                        }
                        .into_any()
                    }
                }}
            </main>

            <Show when=move || show_all_types.get()>
                <AllTypesModal
                    english=english
                    on_close=move || set_show_all_types.set(false)
                />
            </Show>
        </div>
    }
}
