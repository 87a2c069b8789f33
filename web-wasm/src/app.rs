//! メインアプリケーションコンポーネント

use std::rc::Rc;

use leptos::prelude::*;
use crate::api::{self, predict::{HttpPredictor, Predictor}};
use crate::components::{header::Header, prediction_form::PredictionForm};

#[component]
pub fn App() -> impl IntoView {
    let predictor: Rc<dyn Predictor> = Rc::new(HttpPredictor::new(api::endpoint()));

    view! {
        <div class="container">
            <Header />
            <div class="main">
                <PredictionForm predictor=predictor />
            </div>
        </div>
    }
}
