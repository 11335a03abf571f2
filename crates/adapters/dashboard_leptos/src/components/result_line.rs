//! Result area: a signal-backed sink and the line that displays it.

use irpanel_app::ports::ResultSink;
use irpanel_domain::result_view::ResultView;
use leptos::prelude::*;

/// [`ResultSink`] writing into a reactive signal.
#[derive(Debug, Clone, Copy)]
pub struct ResultArea {
    view: RwSignal<ResultView>,
}

impl ResultArea {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(ResultView::default()),
        }
    }
}

impl Default for ResultArea {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultSink for ResultArea {
    fn clear(&self) {
        self.view.update(|view| view.text.clear());
    }

    fn render(&self, view: ResultView) {
        self.view.set(view);
    }
}

/// Plain-text result, red when the tone is an error.
#[component]
pub fn ResultLine(area: ResultArea) -> impl IntoView {
    let style = move || {
        if area.view.with(|view| view.tone.is_error()) {
            "color: red"
        } else {
            ""
        }
    };

    view! {
        <p class="result" style=style>
            {move || area.view.with(|view| view.text.clone())}
        </p>
    }
}
