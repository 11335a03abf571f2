//! Terminal result sink.

use std::cell::RefCell;
use std::io::{IsTerminal, Stdout, Write};

use irpanel_app::ports::ResultSink;
use irpanel_domain::result_view::ResultView;

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Prints each rendered result as a labelled line.
///
/// A terminal cannot take back a printed line, so clearing is a no-op.
pub struct TerminalSink<W> {
    label: &'static str,
    color: bool,
    out: RefCell<W>,
}

impl TerminalSink<Stdout> {
    /// Sink on stdout, coloured when stdout is a terminal and `NO_COLOR` is unset.
    #[must_use]
    pub fn stdout(label: &'static str) -> Self {
        let out = std::io::stdout();
        let color = out.is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self::new(label, out, color)
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(label: &'static str, out: W, color: bool) -> Self {
        Self {
            label,
            color,
            out: RefCell::new(out),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn format_line(&self, view: &ResultView) -> String {
        if self.color && view.tone.is_error() {
            format!("{}: {RED}{}{RESET}", self.label, view.text)
        } else {
            format!("{}: {}", self.label, view.text)
        }
    }
}

impl<W: Write> ResultSink for TerminalSink<W> {
    fn clear(&self) {
        tracing::trace!(label = self.label, "result cleared");
    }

    fn render(&self, view: ResultView) {
        let line = self.format_line(&view);
        if let Err(err) = writeln!(self.out.borrow_mut(), "{line}") {
            tracing::warn!(label = self.label, error = %err, "failed to print result");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printed(sink: TerminalSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn should_print_labelled_line() {
        let sink = TerminalSink::new("temperature", Vec::new(), true);
        sink.render(ResultView::normal("23.5\u{b0}C"));
        assert_eq!(printed(sink), "temperature: 23.5\u{b0}C\n");
    }

    #[test]
    fn should_print_error_in_red_when_colored() {
        let sink = TerminalSink::new("aircon", Vec::new(), true);
        sink.render(ResultView::error("error"));
        assert_eq!(printed(sink), "aircon: \x1b[31merror\x1b[0m\n");
    }

    #[test]
    fn should_print_plain_error_without_color() {
        let sink = TerminalSink::new("aircon", Vec::new(), false);
        sink.render(ResultView::error("Sensor fault"));
        assert_eq!(printed(sink), "aircon: Sensor fault\n");
    }

    #[test]
    fn should_print_nothing_on_clear() {
        let sink = TerminalSink::new("temperature", Vec::new(), false);
        sink.render(ResultView::normal("21"));
        sink.clear();
        assert_eq!(printed(sink), "temperature: 21\n");
    }
}
