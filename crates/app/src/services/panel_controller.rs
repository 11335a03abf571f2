//! Panel controller — the two device actions and their result areas.

use irpanel_domain::endpoint::{TEMPERATURE_PATH, ir_command_target};
use irpanel_domain::error::TransportError;
use irpanel_domain::response::DeviceResponse;
use irpanel_domain::result_view::ResultView;

use crate::ports::{DeviceGateway, IrForm, ResultSink};

/// Drives the temperature and IR actions of the panel.
///
/// Every handle is injected: the gateway that talks to the device, the IR
/// form to read fields from, and one result sink per action. The controller
/// keeps no request state. Overlapping calls of the same action are not
/// sequenced, so whichever response completes last is what stays rendered.
pub struct PanelController<G, F, T, I> {
    gateway: G,
    form: F,
    temperature: T,
    ir: I,
}

impl<G, F, T, I> PanelController<G, F, T, I>
where
    G: DeviceGateway,
    F: IrForm,
    T: ResultSink,
    I: ResultSink,
{
    /// Wire a controller from its handles.
    ///
    /// `temperature` receives the outcome of [`fetch_temperature`](Self::fetch_temperature),
    /// `ir` the outcome of [`submit_ir_command`](Self::submit_ir_command).
    pub fn new(gateway: G, form: F, temperature: T, ir: I) -> Self {
        Self {
            gateway,
            form,
            temperature,
            ir,
        }
    }

    /// Initial page load: fetch the temperature once.
    pub async fn load(&self) -> ResultView {
        tracing::debug!("initial load");
        self.fetch_temperature().await
    }

    /// Clear the temperature area, GET `temp` and render the outcome.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_temperature(&self) -> ResultView {
        self.temperature.clear();
        let outcome = self.gateway.get(TEMPERATURE_PATH).await;
        render_outcome(&self.temperature, outcome)
    }

    /// Read the form, clear the IR area, GET `ir/aircon?<fields>` and render
    /// the outcome.
    #[tracing::instrument(skip(self))]
    pub async fn submit_ir_command(&self) -> ResultView {
        let command = self.form.snapshot();
        let target = ir_command_target(&command);
        tracing::debug!(%target, fields = command.len(), "submitting IR command");
        self.ir.clear();
        let outcome = self.gateway.get(&target).await;
        render_outcome(&self.ir, outcome)
    }

    /// A form field changed: the previous IR result no longer applies.
    pub fn form_changed(&self) {
        self.ir.clear();
    }

    pub fn temperature_sink(&self) -> &T {
        &self.temperature
    }

    pub fn ir_sink(&self) -> &I {
        &self.ir
    }
}

fn render_outcome(
    sink: &impl ResultSink,
    outcome: Result<DeviceResponse, TransportError>,
) -> ResultView {
    match &outcome {
        Ok(response) => tracing::debug!(status = response.status, "device responded"),
        Err(err) => tracing::warn!(error = %err, "device unreachable"),
    }
    let view = ResultView::from_outcome(outcome);
    sink.render(view.clone());
    view
}
