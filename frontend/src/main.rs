mod api;
mod components;

use api::{ApiHandle, service_client};
use components::explorer::Explorer;
use components::header::render_header;
use components::researcher::Researcher;
use components::utils::render_error_message;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum View {
    Explorer,
    Researcher,
}

pub enum Msg {
    Show(View),
}

pub struct Model {
    view: View,
    api: Result<ApiHandle, String>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let api = service_client().map_err(|e| {
            log::error!("Prediction client unavailable: {}", e);
            e.to_string()
        });
        Self { view: View::Explorer, api }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Show(view) => {
                let changed = self.view != view;
                self.view = view;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header(self.view, ctx.link()) }

                <main class="main-content">
                {
                    match &self.api {
                        Err(error) => render_error_message(Some(error.as_str())),
                        Ok(api) => match self.view {
                            View::Explorer => html! { <Explorer api={api.clone()} /> },
                            View::Researcher => html! { <Researcher api={api.clone()} /> },
                        },
                    }
                }
                </main>

                <footer class="app-footer">
                    <p>{"Predictions are an aid, not a formal confirmation."}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
