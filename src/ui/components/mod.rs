//! Reusable UI components.
//!
//! - `DialogFrame` - Centered dialog overlay with rounded borders
//! - `InputField` - Text input with focus handling and secret masking
//! - `StatusIndicator` - Spinner, success, error and info lines

mod dialog_frame;
mod input_field;
mod status_indicator;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use input_field::{input_field_height, render_input_field, InputFieldConfig};
pub use status_indicator::{
    next_spinner_frame, render_status_line, spinner_char, StatusIndicatorType,
};
