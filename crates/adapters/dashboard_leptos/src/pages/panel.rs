use irpanel_app::services::panel_controller::PanelController;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::GlooGateway;
use crate::components::{ResultArea, ResultLine, SelectField};
use crate::form::{AirconForm, FAN_OPTIONS, MAX_TEMP, MIN_TEMP, MODE_OPTIONS, POWER_OPTIONS};

/// Temperature readout and aircon IR form.
///
/// The controller is rebuilt from `Copy` handles for each event; it holds no
/// state of its own, so every instance drives the same result areas.
#[component]
pub fn Panel() -> impl IntoView {
    let form = AirconForm::default();
    let temperature = ResultArea::new();
    let ir = ResultArea::new();
    let controller = move || PanelController::new(GlooGateway, form, temperature, ir);

    spawn_local(async move {
        controller().load().await;
    });

    let on_get_temp = move |_: MouseEvent| {
        spawn_local(async move {
            controller().fetch_temperature().await;
        });
    };
    let on_send_ir = move |_: MouseEvent| {
        spawn_local(async move {
            controller().submit_ir_command().await;
        });
    };

    view! {
        <section>
            <h2>"Temperature"</h2>
            <button type="button" on:click=on_get_temp>"Get temperature"</button>
            <ResultLine area=temperature/>
        </section>
        <section>
            <h2>"Air conditioner"</h2>
            <form
                on:change=move |_| controller().form_changed()
                on:submit=|ev| ev.prevent_default()
            >
                <SelectField label="Power" name="power" options=POWER_OPTIONS value=form.power/>
                <SelectField label="Mode" name="mode" options=MODE_OPTIONS value=form.mode/>
                <label>
                    "Temperature"
                    <input
                        type="number"
                        name="temp"
                        min=MIN_TEMP.to_string()
                        max=MAX_TEMP.to_string()
                        prop:value=move || form.temp.get()
                        on:input=move |ev| form.temp.set(event_target_value(&ev))
                    />
                </label>
                <SelectField label="Fan" name="fan" options=FAN_OPTIONS value=form.fan/>
            </form>
            <button type="button" on:click=on_send_ir>"Send"</button>
            <ResultLine area=ir/>
        </section>
    }
}
