/// Error types for control selection and chart lookup
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ViewError {
    /// No control has this id
    #[error("Unknown control: {0}")]
    UnknownControl(String),

    /// No chart has this id
    #[error("Unknown chart: {0}")]
    UnknownChart(String),

    /// The value is not among the control's options
    #[error("'{value}' is not an option of control {control}")]
    InvalidOption { control: &'static str, value: String },

    /// More than one value given to a single-select control
    #[error("Control {0} accepts a single value")]
    MultipleValues(&'static str),

    /// A country list given to a single-select control, or the reverse
    #[error("Wrong kind of value for control {0}")]
    KindMismatch(&'static str),

    /// The control does not feed the requested chart
    #[error("Control {control} is not an input of chart {chart}")]
    NotAnInput { control: &'static str, chart: &'static str },

    /// The control belongs to a panel that is not mounted
    #[error("Control {control} is not on the panel at {path}")]
    ControlNotMounted { control: &'static str, path: String },
}

pub type Result<T> = std::result::Result<T, ViewError>;
