//! Conditional-requirement helpers shared by the plot and plot log entry
//! validators.

use super::errors::{ValidationErrors, NOT_REQUIRED_MSG, REQUIRED_MSG};
use crate::plot::choices::{LogStatus, PlotStatus, TimeOfDay, TimeOfWeek, OTHER};
use crate::plot::field::Field;

/// Whether a submitted form value counts as filled in.
///
/// Blank strings and a numeric zero count as not provided.
pub trait Provided {
    fn is_provided(&self) -> bool;

    /// Whether the form sent the field at all. Unsubmitted fields are never
    /// reported by the conditional rules.
    fn is_submitted(&self) -> bool {
        true
    }
}

impl<T: Provided> Provided for Field<T> {
    fn is_provided(&self) -> bool {
        self.value().is_some_and(Provided::is_provided)
    }

    fn is_submitted(&self) -> bool {
        !self.is_absent()
    }
}

impl<T: Provided> Provided for Option<T> {
    fn is_provided(&self) -> bool {
        self.as_ref().is_some_and(Provided::is_provided)
    }
}

impl Provided for String {
    fn is_provided(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl Provided for u32 {
    fn is_provided(&self) -> bool {
        *self != 0
    }
}

impl Provided for bool {
    fn is_provided(&self) -> bool {
        true
    }
}

macro_rules! choice_is_provided {
    ($($ty:ty),*) => {
        $(impl Provided for $ty {
            fn is_provided(&self) -> bool {
                true
            }
        })*
    };
}

choice_is_provided!(PlotStatus, LogStatus, TimeOfWeek, TimeOfDay);

/// `field` must be filled in when `condition` holds and left blank when it
/// does not.
pub fn required_if<T: Provided>(
    condition: bool,
    field: &str,
    value: &T,
    errors: &mut ValidationErrors,
) {
    if !value.is_submitted() {
        return;
    }
    if condition && !value.is_provided() {
        errors.add(field, REQUIRED_MSG);
    } else if !condition && value.is_provided() {
        errors.add(field, NOT_REQUIRED_MSG);
    }
}

/// As [`required_if`], with the condition being the truthiness of another
/// submitted value.
pub fn required_if_true<C: Provided, T: Provided>(
    condition: &C,
    field: &str,
    value: &T,
    errors: &mut ValidationErrors,
) {
    required_if(condition.is_provided(), field, value, errors);
}

/// `other_field` must explain `value` when `value` is the [`OTHER`] sentinel,
/// and must be blank otherwise.
pub fn validate_other_specify<T: Provided>(
    value: Option<&str>,
    other_field: &str,
    other_value: &T,
    errors: &mut ValidationErrors,
) {
    required_if(value == Some(OTHER), other_field, other_value, errors);
}
