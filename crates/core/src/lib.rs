//! Validation rules for plot records and plot log entries collected during
//! a household field survey.

pub mod plot;
pub mod settings;
pub mod validate;
