use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A form field that distinguishes "not on the form" from "left blank".
///
/// Conditional rules only look at fields the form actually submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<T> {
    /// The key was not submitted at all.
    Absent,
    /// Submitted as `null`.
    Blank,
    Value(T),
}

impl<T> Field<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Value(value) => Some(value),
            Field::Absent | Field::Blank => None,
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Field::Blank, Field::Value)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Only reached when the key is present; a missing key is `Default`.
        Option::<T>::deserialize(deserializer).map(Field::from)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(default)]
    struct Form {
        #[serde(skip_serializing_if = "Field::is_absent")]
        count: Field<u32>,
    }

    #[test]
    fn missing_key_is_absent() {
        let form: Form = serde_json::from_str("{}").unwrap();
        assert_eq!(form.count, Field::Absent);
    }

    #[test]
    fn null_is_blank() {
        let form: Form = serde_json::from_str(r#"{"count": null}"#).unwrap();
        assert_eq!(form.count, Field::Blank);
    }

    #[test]
    fn value_is_kept() {
        let form: Form = serde_json::from_str(r#"{"count": 3}"#).unwrap();
        assert_eq!(form.count, Field::Value(3));
        assert_eq!(form.count.value(), Some(&3));
    }

    #[test]
    fn absent_is_not_serialized() {
        assert_eq!(serde_json::to_string(&Form::default()).unwrap(), "{}");
        let blank = Form { count: Field::Blank };
        assert_eq!(serde_json::to_string(&blank).unwrap(), r#"{"count":null}"#);
    }
}
