use client::Session;
use shared::format_confidence;
use yew::prelude::*;

use super::utils::render_error_message;

pub fn render_results(session: &Session, empty_hint: &str) -> Html {
    let verdict = match session.result() {
        Some(result) => {
            let confidence = format_confidence(result.confidence);
            html! {
                <div class="results-container">
                    <div class="prediction">{ &result.prediction }</div>
                    <div class="confidence-meter">
                        <div class="meter-label">{"Confidence:"}</div>
                        <div class="meter">
                            <div class="meter-fill" style={format!("width: {}", confidence)}></div>
                        </div>
                        <div class="meter-value">{ confidence }</div>
                    </div>
                </div>
            }
        }
        None => html! { <p class="no-results-message">{ empty_hint }</p> },
    };

    html! {
        <div class="result">
            { verdict }
            { if session.is_busy() { html! { <p class="busy">{"Predicting…"}</p> } } else { html! {} } }
            { render_error_message(session.error()) }
        </div>
    }
}
