use crate::{Model, Msg, View};
use yew::html::Scope;
use yew::prelude::*;

/// Renders the application header with the view switcher
pub fn render_header(current: View, link: &Scope<Model>) -> Html {
    let tab = |view: View, label: &'static str| {
        html! {
            <button
                class={classes!("tab", (current == view).then_some("active"))}
                onclick={link.callback(move |_| Msg::Show(view))}
            >
                { label }
            </button>
        }
    };

    html! {
        <header class="app-header">
            <h1>{"Kepler Objects of Interest"}</h1>
            <p class="subtitle">{"Browse the catalog and ask the classifier what it sees"}</p>
            <nav class="tabs">
                { tab(View::Explorer, "Explorer") }
                { tab(View::Researcher, "Researcher") }
            </nav>
        </header>
    }
}
