mod result_line;
mod select_field;

pub use result_line::{ResultArea, ResultLine};
pub use select_field::SelectField;
