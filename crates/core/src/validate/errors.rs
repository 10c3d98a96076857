use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Key under which errors that concern the record as a whole are filed.
pub const NON_FIELD_ERRORS: &str = "__all__";

pub const REQUIRED_MSG: &str = "This field is required.";
pub const NOT_REQUIRED_MSG: &str = "This field is not required.";

/// Machine-checkable codes for business-rule violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidNewPlot,
    SpecialLocation,
    PlotLog,
    PlotLogEntry,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidNewPlot => "invalid_new_plot",
            ErrorCode::SpecialLocation => "special_location",
            ErrorCode::PlotLog => "plot_log",
            ErrorCode::PlotLogEntry => "plot_log_entry",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
}

/// Every rule violation found for one submitted record, grouped by field in
/// the order the rules reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("validation failed: {}", summarize(.fields))]
pub struct ValidationErrors {
    fields: Vec<(String, Vec<FieldError>)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.push(field, message.into(), None);
    }

    pub fn add_coded(&mut self, field: &str, message: impl Into<String>, code: ErrorCode) {
        self.push(field, message.into(), Some(code));
    }

    fn push(&mut self, field: &str, message: String, code: Option<ErrorCode>) {
        let error = FieldError { message, code };
        match self.fields.iter_mut().find(|(name, _)| name == field) {
            Some((_, errors)) => errors.push(error),
            None => self.fields.push((field.to_string(), vec![error])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields with at least one error.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, field: &str) -> Option<&[FieldError]> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, errors)| errors.as_slice())
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn contains_code(&self, code: ErrorCode) -> bool {
        self.codes().any(|c| c == code)
    }

    pub fn codes(&self) -> impl Iterator<Item = ErrorCode> + '_ {
        self.iter().filter_map(|(_, error)| error.code)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.fields
            .iter()
            .flat_map(|(name, errors)| errors.iter().map(move |e| (name.as_str(), e)))
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn summarize(fields: &[(String, Vec<FieldError>)]) -> String {
    fields
        .iter()
        .flat_map(|(field, errors)| {
            errors
                .iter()
                .map(move |error| format!("{field}: {}", error.message))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (field, errors) in &self.fields {
            map.serialize_entry(field, errors)?;
        }
        map.end()
    }
}
