//! Resource-level API: a `SiteClient` paired with a `Transport`.
//!
//! Each call is one round-trip with no retry. Callers still check
//! `success` on the returned envelope, since some application errors come
//! back with a 2xx status.

use serde::de::DeserializeOwned;

use crate::client::SiteClient;
use crate::config::ApiConfig;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, RequestOptions};
use crate::transport::{Transport, UreqTransport};
use crate::types::{
    ContactRequest, ContactResponse, ContentItem, Faq, Project, Service, Statistic, Testimonial,
};

#[derive(Debug, Clone)]
pub struct Backend<T> {
    client: SiteClient,
    transport: T,
}

impl Backend<UreqTransport> {
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(SiteClient::new(config), UreqTransport::new())
    }
}

impl<T: Transport> Backend<T> {
    pub fn new(client: SiteClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &SiteClient {
        &self.client
    }

    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        Ok(self.transport.execute(request)?)
    }

    /// Generic typed request against `endpoint`.
    pub fn request<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Envelope<R>, ApiError> {
        let request = self.client.build_request(endpoint, options);
        let response = self.send(&request)?;
        self.client.parse_envelope(response)
    }

    /// `POST /contact`.
    pub fn submit_contact(&self, input: &ContactRequest) -> Result<ContactResponse, ApiError> {
        let request = self.client.build_submit_contact(input)?;
        let response = self.send(&request)?;
        self.client.parse_submit_contact(response)
    }

    /// `GET` the full list for any content resource.
    pub fn list<R>(&self) -> Result<Envelope<Vec<R>>, ApiError>
    where
        R: ContentItem + DeserializeOwned,
    {
        let request = self.client.build_list::<R>();
        let response = self.send(&request)?;
        self.client.parse_envelope(response)
    }

    pub fn services(&self) -> Result<Envelope<Vec<Service>>, ApiError> {
        self.list()
    }

    pub fn portfolio(&self) -> Result<Envelope<Vec<Project>>, ApiError> {
        self.list()
    }

    pub fn testimonials(&self) -> Result<Envelope<Vec<Testimonial>>, ApiError> {
        self.list()
    }

    pub fn statistics(&self) -> Result<Envelope<Vec<Statistic>>, ApiError> {
        self.list()
    }

    pub fn faq(&self) -> Result<Envelope<Vec<Faq>>, ApiError> {
        self.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::http::HttpMethod;

    fn backend<F>(f: F) -> Backend<F>
    where
        F: Fn(&HttpRequest) -> Result<HttpResponse, TransportError>,
    {
        Backend::new(SiteClient::with_base_url("http://backend.test/api"), f)
    }

    fn ok(body: &str) -> Result<HttpResponse, TransportError> {
        Ok(HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        })
    }

    #[test]
    fn services_hits_services_endpoint() {
        let backend = backend(|req: &HttpRequest| {
            assert_eq!(req.method, HttpMethod::Get);
            assert_eq!(req.path, "http://backend.test/api/services");
            ok(r#"{"success":true,"data":[{"id":1,"title":"Web","description":"Sites"}]}"#)
        });
        let env = backend.services().unwrap();
        assert_eq!(env.data.unwrap()[0].title, "Web");
    }

    #[test]
    fn submit_contact_posts_json() {
        let backend = backend(|req: &HttpRequest| {
            assert_eq!(req.method, HttpMethod::Post);
            assert!(req.path.ends_with("/contact"));
            assert_eq!(req.header("content-type"), Some("application/json"));
            ok(r#"{"success":true,"message":"Thanks"}"#)
        });
        let input = ContactRequest {
            name: "Jo".into(),
            email: "a@b.com".into(),
            message: "0123456789".into(),
        };
        let env = backend.submit_contact(&input).unwrap();
        assert!(env.success);
        assert_eq!(env.message.as_deref(), Some("Thanks"));
    }

    #[test]
    fn transport_failure_is_network_error() {
        let backend = backend(|_: &HttpRequest| Err(TransportError("refused".into())));
        let err = backend.faq().unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[test]
    fn generic_request_merges_options() {
        let backend = backend(|req: &HttpRequest| {
            assert_eq!(req.path, "http://backend.test/api/custom");
            assert_eq!(req.header("x-trace"), Some("1"));
            ok(r#"{"success":true,"data":42}"#)
        });
        let env: Envelope<u32> = backend
            .request("/custom", RequestOptions::get().with_header("x-trace", "1"))
            .unwrap();
        assert_eq!(env.data, Some(42));
    }
}
