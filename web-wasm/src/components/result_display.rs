//! Result display component
//!
//! Renders a validated analysis result against the catalog. Fails
//! closed: an unknown or inconsistent primary id renders the "result
//! unavailable" state instead of a partial card. Individual top-3 rows
//! with unknown ids fall back to the raw text the model supplied.

use leptos::prelude::*;

use ksnackface_common::{find_snack_type, AnalysisResult, SnackMatch};

use crate::share;

/// DOM id of the exported card, used by the share capture
const RESULT_CARD_ID: &str = "result-card";

#[component]
pub fn ResultDisplay<G>(
    result: AnalysisResult,
    image_url: String,
    english: ReadSignal<bool>,
    on_reset: G,
) -> impl IntoView
where
    G: Fn() + 'static + Copy,
{
    let primary = find_snack_type(&result.primary_match_id);

    // fail closed on an unknown or inconsistent primary id
    let Some(primary) = primary.filter(|_| result.primary_is_consistent()) else {
        return view! {
            <div class="error-panel">
                <p class="error-text">
                    {move || if english.get() {
                        "Result unavailable. Please try again."
                    } else {
                        "결과를 표시할 수 없습니다. 다시 시도해주세요."
                    }}
                </p>
                <button class="btn" on:click=move |_| on_reset()>
                    {move || if english.get() { "Start over" } else { "다시 시작하기" }}
                </button>
            </div>
        }
        .into_any();
    };

    let (is_sharing, set_is_sharing) = signal(false);

    let reason_kr = result.reason(false).to_string();
    let reason_en = result.reason(true).to_string();
    let kstars = result.all_matched_kstars.clone();
    let rows = result
        .top_3_matches
        .iter()
        .map(|m| match_row(m, english))
        .collect_view();

    let on_share = move |_| {
        if is_sharing.get_untracked() {
            return;
        }
        set_is_sharing.set(true);
        let en = english.get_untracked();
        leptos::task::spawn_local(async move {
            if let Err(err) = share::share_result_card(RESULT_CARD_ID, primary, en).await {
                gloo::console::error!("share failed:", err);
                share::alert(if en {
                    "Sharing failed. Please try again later."
                } else {
                    "공유에 실패했습니다. 잠시 후 다시 시도해주세요."
                });
            }
            set_is_sharing.set(false);
        });
    };

    view! {
        <div class="result">
            <div id=RESULT_CARD_ID class="result-card">
                <div class="result-photo">
                    <img src=image_url alt="uploaded face" />
                </div>
                <div class="result-summary">
                    <p class="result-vibe">
                        {move || if english.get() { primary.vibe_en } else { primary.vibe }}
                    </p>
                    <h2 class=format!("result-snack {}", primary.color_class)>
                        {move || if english.get() {
                            format!("{} Type", primary.snack_en)
                        } else {
                            format!("{} 유형", primary.snack)
                        }}
                    </h2>
                    <p class="result-reason">
                        {move || if english.get() { reason_en.clone() } else { reason_kr.clone() }}
                    </p>
                    <div class="result-kstars">
                        <p class="text-muted">
                            {move || if english.get() {
                                "K-stars of the same type"
                            } else {
                                "같은 유형의 K-스타"
                            }}
                        </p>
                        <p>{kstars}</p>
                    </div>
                </div>
                <div class="result-ranking">
                    <p class="text-muted">
                        {move || if english.get() { "Top 3 matches" } else { "상위 3개 유형" }}
                    </p>
                    {rows}
                </div>
            </div>

            <div class="share-buttons-container">
                <button class="btn" on:click=on_share disabled=move || is_sharing.get()>
                    {move || match (is_sharing.get(), english.get()) {
                        (true, true) => "Sharing...",
                        (true, false) => "공유 중...",
                        (false, true) => "Share result",
                        (false, false) => "결과 공유하기",
                    }}
                </button>
                <button class="btn-secondary" on:click=move |_| on_reset()>
                    {move || if english.get() { "Try another photo" } else { "다른 사진으로 해보기" }}
                </button>
            </div>
        </div>
    }
    .into_any()
}

/// One ranked row; unknown ids fall back to the model-supplied text
fn match_row(m: &SnackMatch, english: ReadSignal<bool>) -> impl IntoView {
    let rank = m.rank;
    let score = m.match_score_percent;
    let entry = find_snack_type(&m.match_id);

    let label_kr = entry
        .map(|t| format!("{} ({})", t.snack, t.vibe))
        .unwrap_or_else(|| format!("{} ({})", m.snack_name, m.vibe_keyword_kr));
    let label_en = entry
        .map(|t| format!("{} ({})", t.snack_en, t.vibe_en))
        .unwrap_or_else(|| {
            format!(
                "{} ({})",
                m.snack_name,
                m.vibe_keyword_en.as_deref().unwrap_or(&m.vibe_keyword_kr)
            )
        });

    view! {
        <div class="match-row">
            <span class="match-rank">
                {move || if english.get() { format!("#{}", rank) } else { format!("{}위", rank) }}
            </span>
            <span class="match-label">
                {move || if english.get() { label_en.clone() } else { label_kr.clone() }}
            </span>
            <div class="match-bar">
                <div class="match-bar-fill" style=format!("width: {}%", score) />
            </div>
            <span class="match-score">{format!("{}%", score)}</span>
        </div>
    }
}
