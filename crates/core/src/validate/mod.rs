pub mod errors;
pub mod plot;
pub mod plot_log_entry;
pub mod rules;

pub use errors::{ErrorCode, FieldError, ValidationErrors, NON_FIELD_ERRORS};
pub use plot::{PlotContext, PlotValidator};
pub use plot_log_entry::PlotLogEntryValidator;
