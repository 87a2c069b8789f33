//! 予測フォームコンポーネント
//!
//! 入力ごとに `FormState` を更新し、送信時にその時点の値から
//! リクエストを組み立てて1回だけ送る。

use std::rc::Rc;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use crime_predict_common::{FormState, FIELDS};
use crate::api::predict::Predictor;
use crate::components::prediction_result::{ErrorNotice, PredictionResult};

#[component]
pub fn PredictionForm(
    predictor: Rc<dyn Predictor>,
    /// 初期状態（省略時は空）
    #[prop(optional)]
    initial: Option<FormState>,
) -> impl IntoView {
    let state = RwSignal::new(initial.unwrap_or_default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let submission = match state.try_update(FormState::begin_submit) {
            Some(Ok(submission)) => submission,
            Some(Err(e)) => {
                log::warn!("prediction not sent: {}", e);
                return;
            }
            None => return,
        };

        let predictor = predictor.clone();
        spawn_local(async move {
            let outcome = predictor.predict(submission.request).await;
            if let Err(e) = &outcome {
                log::error!("prediction failed: {}", e);
            }
            state.try_update(|s| s.apply_response(submission.ticket, outcome));
        });
    };

    let inputs = FIELDS
        .into_iter()
        .map(|spec| {
            let field = spec.field;
            view! {
                <div class="form-group">
                    <label for=spec.name>{spec.label}</label>
                    <input
                        type=spec.kind.as_str()
                        name=spec.name
                        id=spec.name
                        step=spec.step
                        prop:value=move || state.with(|s| s.value(field).to_string())
                        on:input=move |ev| {
                            state.update(|s| s.set(field, event_target_value(&ev)));
                        }
                    />
                </div>
            }
        })
        .collect_view();

    let prediction = Signal::derive(move || {
        state.with(|s| s.prediction_result().unwrap_or_default().to_string())
    });
    let error = Signal::derive(move || state.with(|s| s.error().unwrap_or_default().to_string()));

    view! {
        <form on:submit=on_submit>
            {inputs}
            <button type="submit" aria-label="submit">"Prédire"</button>
        </form>

        <Show when=move || state.with(|s| s.prediction_result().is_some())>
            <PredictionResult text=prediction />
        </Show>

        <Show when=move || state.with(|s| s.error().is_some())>
            <ErrorNotice message=error />
        </Show>
    }
}
