use client::{ClientError, DEBOUNCE_MS, DebounceToken, Debouncer, Dispatch, Session, Ticket};
use shared::{DatasetRecord, Feature, PLACEHOLDER, PredictionResult, fmt};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::fields::{EXPLORER_FIELDS, render_field};
use super::results::render_results;
use super::utils::render_error_message;
use crate::api::{ApiHandle, TimeoutScheduler};

pub enum Msg {
    CatalogLoaded(Vec<DatasetRecord>),
    CatalogFailed(ClientError),
    Search(String),
    Select(i64),
    Edit(Feature, Option<f64>),
    DebounceFired(DebounceToken),
    PredictionDone(Ticket, Result<PredictionResult, ClientError>),
}

#[derive(Properties, PartialEq)]
pub struct ExplorerProps {
    pub api: ApiHandle,
}

/// Catalog browser with debounced what-if predictions.
pub struct Explorer {
    session: Session,
    debouncer: Debouncer<TimeoutScheduler>,
}

impl Component for Explorer {
    type Message = Msg;
    type Properties = ExplorerProps;

    fn create(ctx: &Context<Self>) -> Self {
        let client = Rc::clone(&ctx.props().api.0);
        let link = ctx.link().clone();
        spawn_local(async move {
            match client.list_catalog().await {
                Ok(records) => link.send_message(Msg::CatalogLoaded(records)),
                Err(e) => {
                    log::error!("Catalog unavailable: {}", e);
                    link.send_message(Msg::CatalogFailed(e));
                }
            }
        });

        Self {
            session: Session::explorer(),
            debouncer: Debouncer::new(TimeoutScheduler, Duration::from_millis(DEBOUNCE_MS)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CatalogLoaded(records) => {
                log::info!("Catalog loaded with {} records", records.len());
                self.session.catalog_loaded(records);
                true
            }
            Msg::CatalogFailed(e) => {
                self.session.catalog_failed(&e);
                true
            }
            Msg::Search(query) => {
                self.session.set_query(query);
                true
            }
            Msg::Select(kepid) => self.handle_select(kepid),
            Msg::Edit(feature, value) => self.handle_edit(ctx, feature, value),
            Msg::DebounceFired(token) => match self.session.fire(token) {
                Some(dispatch) => {
                    self.send_prediction(ctx, dispatch);
                    true
                }
                None => false,
            },
            Msg::PredictionDone(ticket, outcome) => {
                if let Err(e) = &outcome {
                    log::error!("Prediction failed: {}", e);
                }
                self.session.complete(ticket, outcome)
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.debouncer.cancel();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="grid">
                { self.render_browser(ctx) }
                { self.render_summary() }
                { self.render_simulator(ctx) }
            </div>
        }
    }
}

// Handler methods
impl Explorer {
    fn handle_select(&mut self, kepid: i64) -> bool {
        if self.session.select(kepid) {
            self.debouncer.cancel();
            true
        } else {
            false
        }
    }

    fn handle_edit(&mut self, ctx: &Context<Self>, feature: Feature, value: Option<f64>) -> bool {
        match self.session.edit(feature, value) {
            Some(token) => {
                let link = ctx.link().clone();
                self.debouncer.trigger(move || link.send_message(Msg::DebounceFired(token)));
                true
            }
            None => false,
        }
    }

    fn send_prediction(&self, ctx: &Context<Self>, dispatch: Dispatch) {
        let client = Rc::clone(&ctx.props().api.0);
        let link = ctx.link().clone();
        spawn_local(async move {
            let outcome = client.request_prediction(&dispatch.payload, dispatch.model).await;
            link.send_message(Msg::PredictionDone(dispatch.ticket, outcome));
        });
    }
}

// Rendering methods
impl Explorer {
    fn render_browser(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_search = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::Search(input.value())
        });
        let selected = self.session.selected().map(|r| r.kepid);
        let rows = self.session.filtered();

        html! {
            <section class="card">
                <h2>{"KOI Browser"}</h2>
                <input
                    class="input"
                    placeholder="Search by kepid or KOI name..."
                    value={self.session.query().to_string()}
                    oninput={on_search}
                />
                { render_error_message(self.session.catalog_error()) }
                <div class="koi-list">
                    { for rows.iter().map(|row| {
                        let kepid = row.kepid;
                        html! {
                            <button
                                key={kepid.to_string()}
                                class={classes!("koi-row", (selected == Some(kepid)).then_some("selected"))}
                                onclick={link.callback(move |_| Msg::Select(kepid))}
                            >
                                <div class="koi-name">{ row.display_name() }</div>
                                <div class="koi-disposition">
                                    { format!("Disposition: {}", row.koi_disposition.as_deref().unwrap_or(PLACEHOLDER)) }
                                </div>
                            </button>
                        }
                    }) }
                    { if rows.is_empty() { html! { <div class="no-matches">{"No matches."}</div> } } else { html! {} } }
                </div>
            </section>
        }
    }

    fn render_summary(&self) -> Html {
        let Some(record) = self.session.selected() else {
            return html! { <section class="card"><h3>{"Summary"}</h3><p>{"Pick a KOI"}</p></section> };
        };
        let f = &record.features;
        let stat = |label: &str, value: Option<f64>, unit: &str| {
            html! {
                <div class="stat">
                    <b>{ label.to_string() }</b>
                    <div>{ format!("{} {}", fmt(value, 3), unit).trim_end().to_string() }</div>
                </div>
            }
        };

        html! {
            <section class="card">
                <h3>{"Summary"}</h3>
                <div><b>{"Name: "}</b>{ record.display_name() }</div>
                <div>
                    <b>{"Current archive disposition: "}</b>
                    { record.koi_disposition.as_deref().unwrap_or(PLACEHOLDER) }
                </div>
                <div class="stats">
                    { stat("Period", f.koi_period, "d") }
                    { stat("Duration", f.koi_duration, "h") }
                    { stat("Depth", f.koi_depth, "ppm") }
                    { stat("Radius", f.koi_prad, "R⊕") }
                    { stat("SNR", f.koi_model_snr, "") }
                    { stat("Impact (b)", f.koi_impact, "") }
                </div>
            </section>
        }
    }

    fn render_simulator(&self, ctx: &Context<Self>) -> Html {
        let Some(payload) = self.session.payload() else {
            return html! { <section class="card"><h3>{"Simulate"}</h3><p>{"Select a KOI first"}</p></section> };
        };
        let on_edit = ctx.link().callback(|(feature, value): (Feature, Option<f64>)| Msg::Edit(feature, value));

        html! {
            <section class="card">
                <h3>{"Simulate"}</h3>
                <p class="hint">{"Adjust features to see how the predicted class moves. Archive values are not changed."}</p>
                <div class="fields">
                    { for EXPLORER_FIELDS.iter().map(|&feature| render_field(feature, payload.get(feature), &on_edit)) }
                </div>
                { render_results(&self.session, "Make adjustments to see predictions.") }
            </section>
        }
    }
}
