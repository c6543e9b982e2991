//! Client core for the agency site's content backend.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). A `Transport` executes the
//! round-trip; `Backend` pairs the two for the six resource calls.
//!
//! # Design
//! - `SiteClient` is stateless; it holds only `base_url`, taken from an
//!   explicit `ApiConfig`.
//! - Every endpoint answers with an `Envelope`; non-2xx statuses are
//!   classified into `ApiError` variants whose text is user-facing.
//! - Content sections share one fetch-then-fallback helper
//!   (`section::fetch_with_fallback`) and never surface failures.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod accordion;
pub mod backend;
pub mod client;
pub mod config;
pub mod contact;
pub mod envelope;
pub mod error;
pub mod fallback;
pub mod http;
pub mod icon;
pub mod rotation;
pub mod section;
pub mod transport;
pub mod types;

pub use backend::Backend;
pub use client::SiteClient;
pub use config::ApiConfig;
pub use contact::{Banner, BannerKind, ContactForm, Field, SubmitError};
pub use envelope::{Envelope, FieldErrors};
pub use error::{ApiError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, RequestOptions};
pub use icon::Icon;
pub use section::{fetch_with_fallback, Resolution, Section, SectionState, SectionView, Source};
pub use transport::{Transport, UreqTransport};
pub use types::{
    ContactRequest, ContactResponse, ContentItem, Faq, Project, Service, Statistic, Testimonial,
};
