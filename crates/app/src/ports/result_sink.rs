//! Result sink port — where an action's outcome is displayed.

use irpanel_domain::result_view::ResultView;

/// A result area owned by one action.
pub trait ResultSink {
    /// Empty the displayed text.
    ///
    /// The tone may be left as is; it is replaced on the next render.
    fn clear(&self);

    /// Replace the displayed text and tone.
    fn render(&self, view: ResultView);
}

impl<T: ResultSink> ResultSink for &T {
    fn clear(&self) {
        (**self).clear();
    }

    fn render(&self, view: ResultView) {
        (**self).render(view);
    }
}
