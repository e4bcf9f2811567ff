use shared::{Feature, FeatureRange};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Fields offered for simulation in the catalog explorer.
pub const EXPLORER_FIELDS: [Feature; 12] = [
    Feature::KoiPeriod,
    Feature::KoiDuration,
    Feature::KoiDepth,
    Feature::KoiPrad,
    Feature::KoiModelSnr,
    Feature::KoiRor,
    Feature::KoiImpact,
    Feature::KoiMaxMultEv,
    Feature::KoiFpflagSs,
    Feature::KoiFpflagCo,
    Feature::KoiFpflagNt,
    Feature::KoiFpflagEc,
];

const FALLBACK_RANGE: FeatureRange = FeatureRange { min: 0.0, max: 100.0, step: 0.1 };

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    pub feature: Feature,
    pub value: Option<f64>,
    pub onchange: Callback<(Feature, Option<f64>)>,
}

#[function_component(NumberField)]
pub fn number_field(props: &FieldProps) -> Html {
    let feature = props.feature;
    let range = feature.range().unwrap_or(FALLBACK_RANGE);

    let on_text = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let raw = input.value();
            let raw = raw.trim();
            if raw.is_empty() {
                onchange.emit((feature, None));
            } else if let Ok(v) = raw.parse::<f64>() {
                onchange.emit((feature, Some(v)));
            }
        })
    };

    let on_slide = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(v) = input.value().parse::<f64>() {
                onchange.emit((feature, Some(v)));
            }
        })
    };

    let text_value = props.value.map(|v| v.to_string()).unwrap_or_default();
    let slider_value = feature.clamp(props.value.unwrap_or(range.min)).to_string();

    html! {
        <div class="field">
            <div class="label">{ feature.label() }</div>
            <div class="field-row">
                <input class="input" type="number" value={text_value} oninput={on_text} />
                <input
                    class="range"
                    type="range"
                    min={range.min.to_string()}
                    max={range.max.to_string()}
                    step={range.step.to_string()}
                    value={slider_value}
                    oninput={on_slide}
                />
            </div>
            <div class="hint">{ format!("Range: {} – {} (step {})", range.min, range.max, range.step) }</div>
        </div>
    }
}

#[function_component(ToggleField)]
pub fn toggle_field(props: &FieldProps) -> Html {
    let feature = props.feature;
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            onchange.emit((feature, Some(if input.checked() { 1.0 } else { 0.0 })));
        })
    };

    html! {
        <label class="toggle">
            <input type="checkbox" checked={props.value == Some(1.0)} onchange={onchange} />
            <span class="label">{ feature.label() }</span>
        </label>
    }
}

/// Picks the control matching the feature's kind.
pub fn render_field(feature: Feature, value: Option<f64>, onchange: &Callback<(Feature, Option<f64>)>) -> Html {
    match feature.kind() {
        shared::FeatureKind::Real => html! {
            <NumberField feature={feature} value={value} onchange={onchange.clone()} />
        },
        shared::FeatureKind::Flag => html! {
            <ToggleField feature={feature} value={value} onchange={onchange.clone()} />
        },
    }
}
