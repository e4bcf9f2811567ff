use client::{ClientError, Dispatch, Session, Ticket};
use shared::{Feature, ModelKind, PredictionResult};
use std::rc::Rc;
use std::str::FromStr;
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::fields::render_field;
use super::results::render_results;
use crate::api::ApiHandle;

pub enum Msg {
    Edit(Feature, Option<f64>),
    SetModel(ModelKind),
    PredictNow,
    PredictionDone(Ticket, Result<PredictionResult, ClientError>),
}

#[derive(Properties, PartialEq)]
pub struct ResearcherProps {
    pub api: ApiHandle,
}

/// Free-form dashboard: every feature editable, model selectable, manual predict.
pub struct Researcher {
    session: Session,
}

impl Component for Researcher {
    type Message = Msg;
    type Properties = ResearcherProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { session: Session::researcher() }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(feature, value) => {
                self.session.edit(feature, value);
                true
            }
            Msg::SetModel(model) => {
                self.session.set_model(model);
                true
            }
            Msg::PredictNow => match self.session.predict_now() {
                Some(dispatch) => {
                    log::info!("Starting prediction with model {}", dispatch.model);
                    self.send_prediction(ctx, dispatch);
                    true
                }
                None => false,
            },
            Msg::PredictionDone(ticket, outcome) => {
                match &outcome {
                    Ok(result) => log::info!("Prediction successful: {:?}", result),
                    Err(e) => log::error!("Prediction error: {}", e),
                }
                self.session.complete(ticket, outcome)
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_edit = link.callback(|(feature, value): (Feature, Option<f64>)| Msg::Edit(feature, value));
        let on_model = link.batch_callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            ModelKind::from_str(&select.value()).ok().map(Msg::SetModel)
        });
        let busy = self.session.is_busy();
        let payload_json = self
            .session
            .payload()
            .and_then(|p| serde_json::to_string_pretty(p).ok())
            .unwrap_or_default();

        html! {
            <div class="grid">
                <section class="card wide">
                    <h2>{"Researcher Dashboard"}</h2>
                    <div class="controls">
                        <select class="select" onchange={on_model}>
                            { for ModelKind::iter().map(|model| html! {
                                <option value={model.to_string()} selected={model == self.session.model()}>
                                    { model.label() }
                                </option>
                            }) }
                        </select>
                        <button class="btn" onclick={link.callback(|_| Msg::PredictNow)} disabled={busy}>
                            { if busy { "Predicting..." } else { "Predict" } }
                        </button>
                    </div>
                    <div class="fields two-col">
                        { for Feature::iter().map(|feature| {
                            let value = self.session.payload().and_then(|p| p.get(feature));
                            render_field(feature, value, &on_edit)
                        }) }
                    </div>
                </section>

                <section class="card">
                    <h3>{"Result"}</h3>
                    { render_results(&self.session, "No prediction yet.") }
                    <pre class="payload">{ payload_json }</pre>
                </section>
            </div>
        }
    }
}

impl Researcher {
    fn send_prediction(&self, ctx: &Context<Self>, dispatch: Dispatch) {
        let client = Rc::clone(&ctx.props().api.0);
        let link = ctx.link().clone();
        spawn_local(async move {
            let outcome = client.request_prediction(&dispatch.payload, dispatch.model).await;
            link.send_message(Msg::PredictionDone(dispatch.ticket, outcome));
        });
    }
}
