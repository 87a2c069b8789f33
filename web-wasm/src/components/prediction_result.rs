//! 予測結果コンポーネント

use leptos::prelude::*;

#[component]
pub fn PredictionResult(text: Signal<String>) -> impl IntoView {
    view! {
        <div class="result">
            <h2>"Prédiction"</h2>
            <p class="prediction-text">{move || text.get()}</p>
        </div>
    }
}

/// 送信失敗の通知
#[component]
pub fn ErrorNotice(message: Signal<String>) -> impl IntoView {
    view! {
        <p class="error-notice" role="alert">{move || message.get()}</p>
    }
}
