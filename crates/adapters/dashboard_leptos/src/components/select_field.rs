use leptos::prelude::*;

/// Labelled `<select>` bound to a string signal.
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    name: &'static str,
    options: &'static [&'static str],
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label>
            {label}
            <select
                name=name
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {options
                    .iter()
                    .map(|option| view! { <option value=*option>{*option}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}
