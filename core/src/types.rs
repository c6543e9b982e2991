//! Domain DTOs for the site API.
//!
//! # Design
//! These types mirror the backend's JSON schema (camelCase) but are defined
//! independently of the mock-server crate; integration tests catch schema
//! drift. All content records are read-only on this side. Optional display
//! fields stay `Option` so a sparse backend record still deserializes.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::envelope::Envelope;
use crate::fallback;

/// Response to `POST /contact`. The backend sends no payload.
pub type ContactResponse = Envelope<serde_json::Value>;

/// A record shown by one of the content sections.
///
/// Ties the record type to its endpoint, its visibility flag, its sort key
/// and the bundled list shown when the backend cannot supply one.
pub trait ContentItem: Clone + Sized {
    /// Section name used in logs.
    const SECTION: &'static str;
    /// Endpoint path relative to the base URL.
    const ENDPOINT: &'static str;

    /// Sort key; a missing `orderIndex` sorts as 0.
    fn order_index(&self) -> i64;

    /// Only an explicit `false` flag hides a record.
    fn is_visible(&self) -> bool {
        true
    }

    fn fallback() -> Vec<Self>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl ContentItem for Service {
    const SECTION: &'static str = "services";
    const ENDPOINT: &'static str = "/services";

    fn order_index(&self) -> i64 {
        self.order_index.unwrap_or(0)
    }

    fn is_visible(&self) -> bool {
        self.is_active != Some(false)
    }

    fn fallback() -> Vec<Self> {
        fallback::services()
    }
}

/// A portfolio project. Projects carry no visibility flag; `is_featured`
/// is informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl ContentItem for Project {
    const SECTION: &'static str = "portfolio";
    const ENDPOINT: &'static str = "/portfolio";

    fn order_index(&self) -> i64 {
        self.order_index.unwrap_or(0)
    }

    fn fallback() -> Vec<Self> {
        fallback::portfolio()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub content: String,
    /// Star rating; fractional values are allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_approved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl ContentItem for Testimonial {
    const SECTION: &'static str = "testimonials";
    const ENDPOINT: &'static str = "/testimonials";

    fn order_index(&self) -> i64 {
        self.order_index.unwrap_or(0)
    }

    fn is_visible(&self) -> bool {
        self.is_approved != Some(false)
    }

    fn fallback() -> Vec<Self> {
        fallback::testimonials()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistic {
    pub id: i64,
    /// Display figure such as `"500+"` or `"97%"`.
    pub number: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl ContentItem for Statistic {
    const SECTION: &'static str = "statistics";
    const ENDPOINT: &'static str = "/statistics";

    fn order_index(&self) -> i64 {
        self.order_index.unwrap_or(0)
    }

    fn is_visible(&self) -> bool {
        self.is_active != Some(false)
    }

    fn fallback() -> Vec<Self> {
        fallback::statistics()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: i64,
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl ContentItem for Faq {
    const SECTION: &'static str = "faq";
    const ENDPOINT: &'static str = "/faq";

    fn order_index(&self) -> i64 {
        self.order_index.unwrap_or(0)
    }

    fn is_visible(&self) -> bool {
        self.is_active != Some(false)
    }

    fn fallback() -> Vec<Self> {
        fallback::faqs()
    }
}

/// Request payload for `POST /contact`.
///
/// The same rules are checked client-side before submission; the backend may
/// re-validate and answer 400 with field-level errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 2, max = 255, message = "Name must be between 2 and 255 characters"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_reads_camel_case_fields() {
        let service: Service = serde_json::from_str(
            r#"{"id":7,"title":"Web","description":"Sites","orderIndex":3,"isActive":false}"#,
        )
        .unwrap();
        assert_eq!(service.order_index, Some(3));
        assert!(!service.is_visible());
        assert!(service.icon.is_none());
    }

    #[test]
    fn missing_flags_mean_visible_and_order_zero() {
        let faq: Faq = serde_json::from_str(r#"{"id":1,"question":"Q?","answer":"A."}"#).unwrap();
        assert!(faq.is_visible());
        assert_eq!(ContentItem::order_index(&faq), 0);
    }

    #[test]
    fn testimonial_uses_approval_flag() {
        let t: Testimonial = serde_json::from_str(
            r#"{"id":1,"name":"A","role":"B","content":"C","isApproved":false}"#,
        )
        .unwrap();
        assert!(!t.is_visible());
    }

    #[test]
    fn testimonial_list_accepts_fractional_and_odd_ratings() {
        let env: crate::envelope::Envelope<Vec<Testimonial>> = serde_json::from_str(
            r#"{"success":true,"data":[
                {"id":1,"name":"A","role":"B","content":"C","rating":4.5},
                {"id":2,"name":"D","role":"E","content":"F","rating":-1}
            ]}"#,
        )
        .unwrap();
        let ratings: Vec<Option<f64>> = env.data.unwrap().iter().map(|t| t.rating).collect();
        assert_eq!(ratings, vec![Some(4.5), Some(-1.0)]);
    }

    #[test]
    fn projects_are_always_visible() {
        let p: Project = serde_json::from_str(
            r#"{"id":1,"title":"T","category":"C","description":"D","isFeatured":false}"#,
        )
        .unwrap();
        assert!(p.is_visible());
    }

    #[test]
    fn contact_request_accepts_minimum_lengths() {
        let req = ContactRequest {
            name: "Jo".to_string(),
            email: "a@b.com".to_string(),
            message: "0123456789".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn contact_request_rejects_short_message() {
        let req = ContactRequest {
            name: "Jo".to_string(),
            email: "a@b.com".to_string(),
            message: "short".to_string(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("message"));
    }

    #[test]
    fn contact_request_rejects_bad_email_and_long_name() {
        let req = ContactRequest {
            name: "x".repeat(256),
            email: "not-an-email".to_string(),
            message: "long enough message".to_string(),
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
    }
}
