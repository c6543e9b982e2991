//! Stateless HTTP request builder and response parser for the site API.
//!
//! # Design
//! `SiteClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Every endpoint answers with the same envelope, so all parsers share
//! `parse_envelope`, which decodes the body first and only then classifies
//! the status code.

use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::envelope::Envelope;
use crate::error::{
    ApiError, GENERIC_MESSAGE, RATE_LIMIT_MESSAGE, SERVER_MESSAGE, VALIDATION_MESSAGE,
};
use crate::http::{HttpRequest, HttpResponse, RequestOptions};
use crate::types::{
    ContactRequest, ContactResponse, ContentItem, Faq, Project, Service, Statistic, Testimonial,
};

pub const CONTACT_ENDPOINT: &str = "/contact";

const CONTENT_TYPE: &str = "content-type";
const APPLICATION_JSON: &str = "application/json";

/// Synchronous, stateless client for the site API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. Pair it with a `Transport` through `Backend` to
/// perform real calls.
#[derive(Debug, Clone)]
pub struct SiteClient {
    base_url: String,
}

impl SiteClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_base_url(&config.base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request for `endpoint`, merging `options` over the defaults.
    ///
    /// The JSON content-type header is always present unless the caller
    /// overrides it; caller headers replace same-named defaults.
    pub fn build_request(&self, endpoint: &str, options: RequestOptions) -> HttpRequest {
        let mut headers = vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())];
        for (name, value) in options.headers {
            match headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(&name)) {
                Some(existing) => existing.1 = value,
                None => headers.push((name, value)),
            }
        }
        HttpRequest {
            method: options.method,
            path: format!("{}{endpoint}", self.base_url),
            headers,
            body: options.body,
        }
    }

    pub fn build_submit_contact(&self, input: &ContactRequest) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(self.build_request(CONTACT_ENDPOINT, RequestOptions::post().with_body(body)))
    }

    /// `GET` for any content resource.
    pub fn build_list<T: ContentItem>(&self) -> HttpRequest {
        self.build_request(T::ENDPOINT, RequestOptions::get())
    }

    pub fn build_list_services(&self) -> HttpRequest {
        self.build_list::<Service>()
    }

    pub fn build_list_portfolio(&self) -> HttpRequest {
        self.build_list::<Project>()
    }

    pub fn build_list_testimonials(&self) -> HttpRequest {
        self.build_list::<Testimonial>()
    }

    pub fn build_list_statistics(&self) -> HttpRequest {
        self.build_list::<Statistic>()
    }

    pub fn build_list_faq(&self) -> HttpRequest {
        self.build_list::<Faq>()
    }

    /// Decode the envelope and classify non-2xx statuses.
    ///
    /// A 2xx envelope is returned unchanged, including `success: false`.
    pub fn parse_envelope<T: DeserializeOwned>(
        &self,
        response: HttpResponse,
    ) -> Result<Envelope<T>, ApiError> {
        let envelope: Envelope<T> = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;
        if response.is_success() {
            return Ok(envelope);
        }
        Err(classify(response.status, envelope))
    }

    pub fn parse_submit_contact(&self, response: HttpResponse) -> Result<ContactResponse, ApiError> {
        self.parse_envelope(response)
    }

    pub fn parse_list_services(&self, response: HttpResponse) -> Result<Envelope<Vec<Service>>, ApiError> {
        self.parse_envelope(response)
    }

    pub fn parse_list_portfolio(&self, response: HttpResponse) -> Result<Envelope<Vec<Project>>, ApiError> {
        self.parse_envelope(response)
    }

    pub fn parse_list_testimonials(
        &self,
        response: HttpResponse,
    ) -> Result<Envelope<Vec<Testimonial>>, ApiError> {
        self.parse_envelope(response)
    }

    pub fn parse_list_statistics(
        &self,
        response: HttpResponse,
    ) -> Result<Envelope<Vec<Statistic>>, ApiError> {
        self.parse_envelope(response)
    }

    pub fn parse_list_faq(&self, response: HttpResponse) -> Result<Envelope<Vec<Faq>>, ApiError> {
        self.parse_envelope(response)
    }
}

/// Map a non-2xx status and its envelope to the matching `ApiError`.
///
/// Precedence: 429, 400, 5xx, then everything else.
fn classify<T>(status: u16, envelope: Envelope<T>) -> ApiError {
    let Envelope { message, errors, .. } = envelope;
    match status {
        429 => ApiError::RateLimited(message.unwrap_or_else(|| RATE_LIMIT_MESSAGE.to_string())),
        400 => {
            let fields = errors.unwrap_or_default();
            let message = if fields.is_empty() {
                message.unwrap_or_else(|| VALIDATION_MESSAGE.to_string())
            } else {
                fields.joined()
            };
            ApiError::Validation { message, fields }
        }
        s if s >= 500 => ApiError::Server {
            status,
            message: message.unwrap_or_else(|| SERVER_MESSAGE.to_string()),
        },
        _ => ApiError::Http {
            status,
            message: message.unwrap_or_else(|| GENERIC_MESSAGE.to_string()),
        },
    }
}
