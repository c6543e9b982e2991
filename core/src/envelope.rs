//! The uniform JSON wrapper returned by every backend endpoint.
//!
//! `{ success, message?, data?, errors? }`: `data` is present on success and
//! `errors` maps field names to messages on validation failure.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            errors: None,
        }
    }
}

impl<T> Envelope<Vec<T>> {
    /// The item list, if the backend reported success with at least one item.
    pub fn into_items(self) -> Option<Vec<T>> {
        match self.data {
            Some(items) if self.success && !items.is_empty() => Some(items),
            _ => None,
        }
    }
}

/// Field-level validation messages, in the order the backend sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(String, String)>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push((field.into(), message.into()));
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.iter().find(|(f, _)| f == field).map(|(_, m)| m.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// All messages joined with `", "`.
    pub fn joined(&self) -> String {
        self.0
            .iter()
            .map(|(_, m)| m.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromIterator<(String, String)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, message) in &self.0 {
            map.serialize_entry(field, message)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldErrors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldErrorsVisitor;

        impl<'de> Visitor<'de> for FieldErrorsVisitor {
            type Value = FieldErrors;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field names to messages")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((field, message)) = access.next_entry::<String, String>()? {
                    entries.push((field, message));
                }
                Ok(FieldErrors(entries))
            }
        }

        deserializer.deserialize_map(FieldErrorsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default() {
        let env: Envelope<Vec<u32>> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(env.success);
        assert!(env.message.is_none());
        assert!(env.data.is_none());
        assert!(env.errors.is_none());
    }

    #[test]
    fn field_errors_keep_arrival_order() {
        let env: Envelope<()> = serde_json::from_str(
            r#"{"success":false,"errors":{"name":"too short","email":"invalid","message":"required"}}"#,
        )
        .unwrap();
        let errors = env.errors.unwrap();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.joined(), "too short, invalid, required");
        assert_eq!(errors.get("email"), Some("invalid"));
    }

    #[test]
    fn parsing_is_idempotent() {
        let raw = r#"{"success":true,"message":"ok","data":[1,2,3]}"#;
        let a: Envelope<Vec<u32>> = serde_json::from_str(raw).unwrap();
        let b: Envelope<Vec<u32>> = serde_json::from_str(raw).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn into_items_requires_success_and_non_empty() {
        assert_eq!(Envelope::ok(vec![1]).into_items(), Some(vec![1]));
        assert_eq!(Envelope::<Vec<u8>>::ok(Vec::new()).into_items(), None);

        let mut failed = Envelope::ok(vec![1]);
        failed.success = false;
        assert_eq!(failed.into_items(), None);
    }

    #[test]
    fn serializes_without_absent_fields() {
        let json = serde_json::to_value(Envelope::ok(vec!["a"])).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": ["a"]}));
    }
}
