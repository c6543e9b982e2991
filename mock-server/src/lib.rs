use std::{fmt, sync::Arc};

use axum::{
    extract::{rejection::JsonRejection, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info, warn};
use uuid::Uuid;
use validator::Validate;

pub const RATE_LIMIT_MESSAGE: &str = "Too many requests. Please try again later.";
pub const CONTACT_ACCEPTED: &str = "Thank you for contacting us! We'll respond within 24 hours.";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldMessages>,
}

impl<T> ApiResponse<T> {
    fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            errors: None,
        }
    }

    fn message(success: bool, message: impl Into<String>) -> Self {
        Self {
            success,
            message: Some(message.into()),
            data: None,
            errors: None,
        }
    }
}

/// Per-field validation messages, emitted in form order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldMessages(Vec<(String, String)>);

impl FieldMessages {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == field).map(|(_, v)| v.as_str())
    }

    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for FieldMessages {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

impl<'de> Deserialize<'de> for FieldMessages {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = FieldMessages;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of field names to messages")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut out = Vec::new();
                while let Some(entry) = map.next_entry::<String, String>()? {
                    out.push(entry);
                }
                Ok(FieldMessages(out))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_approved: Option<bool>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistic {
    pub id: i64,
    pub number: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: i64,
    pub question: String,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Everything the content endpoints serve, returned as stored (the server
/// does not filter or sort).
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub services: Vec<Service>,
    pub portfolio: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
    pub statistics: Vec<Statistic>,
    pub faq: Vec<Faq>,
}

impl Catalog {
    /// Sample content: out of order, with one hidden record per flagged resource.
    pub fn seeded() -> Self {
        Self {
            services: vec![
                Service {
                    id: 10,
                    title: "Cloud Migration".to_string(),
                    description: "Move workloads to the cloud.".to_string(),
                    icon: Some("Sparkles".to_string()),
                    color: None,
                    order_index: Some(2),
                    is_active: Some(true),
                },
                Service {
                    id: 11,
                    title: "Legacy Support".to_string(),
                    description: "Retired offering.".to_string(),
                    icon: None,
                    color: None,
                    order_index: Some(0),
                    is_active: Some(false),
                },
                Service {
                    id: 12,
                    title: "API Design".to_string(),
                    description: "Contracts that last.".to_string(),
                    icon: Some("Code".to_string()),
                    color: None,
                    order_index: Some(1),
                    is_active: None,
                },
            ],
            portfolio: vec![
                Project {
                    id: 20,
                    title: "Fleet Tracker".to_string(),
                    category: "IoT".to_string(),
                    description: "Live vehicle telemetry.".to_string(),
                    image_url: None,
                    live_url: Some("https://fleet.example.com".to_string()),
                    order_index: Some(1),
                    is_featured: Some(false),
                },
                Project {
                    id: 21,
                    title: "Clinic Portal".to_string(),
                    category: "Web Development".to_string(),
                    description: "Patient self-service.".to_string(),
                    image_url: None,
                    live_url: None,
                    order_index: None,
                    is_featured: Some(true),
                },
            ],
            testimonials: vec![
                Testimonial {
                    id: 30,
                    name: "Ana Lima".to_string(),
                    role: "COO, Northwind".to_string(),
                    content: "Shipped on time.".to_string(),
                    rating: Some(5.0),
                    order_index: Some(1),
                    is_approved: Some(true),
                },
                Testimonial {
                    id: 31,
                    name: "Pending Review".to_string(),
                    role: "Unknown".to_string(),
                    content: "Not yet approved.".to_string(),
                    rating: Some(1.0),
                    order_index: Some(0),
                    is_approved: Some(false),
                },
            ],
            statistics: vec![Statistic {
                id: 40,
                number: "42".to_string(),
                label: "Releases".to_string(),
                icon: Some("TrendingUp".to_string()),
                order_index: None,
                is_active: Some(true),
            }],
            faq: vec![
                Faq {
                    id: 50,
                    question: "Do you sign NDAs?".to_string(),
                    answer: "Yes.".to_string(),
                    order_index: Some(5),
                    is_active: None,
                },
                Faq {
                    id: 51,
                    question: "Where are you based?".to_string(),
                    answer: "Remote-first.".to_string(),
                    order_index: Some(5),
                    is_active: Some(true),
                },
            ],
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ServerOptions {
    /// Accepted contact submissions before every further one gets 429.
    /// `None` disables the limit.
    pub contact_limit: Option<usize>,
    /// Answer every request with a bare 503 envelope.
    pub outage: bool,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct ContactInput {
    #[serde(default)]
    #[validate(length(min = 2, max = 255, message = "Name must be between 2 and 255 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Email should be valid"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}

impl ContactInput {
    /// Form order, used for the order of validation messages.
    pub const FIELDS: [&'static str; 3] = ["name", "email", "message"];
}

#[derive(Clone, Debug, Serialize)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug)]
pub struct AppState {
    catalog: Arc<RwLock<Catalog>>,
    inbox: Arc<RwLock<Vec<ContactSubmission>>>,
    options: ServerOptions,
}

impl AppState {
    pub fn new(catalog: Catalog, options: ServerOptions) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            inbox: Arc::new(RwLock::new(Vec::new())),
            options,
        }
    }

    pub async fn submissions(&self) -> Vec<ContactSubmission> {
        self.inbox.read().await.clone()
    }

    pub async fn set_catalog(&self, catalog: Catalog) {
        *self.catalog.write().await = catalog;
    }
}

pub fn app() -> Router {
    router(AppState::new(Catalog::seeded(), ServerOptions::default()))
}

/// All routes under `/api`, the prefix the site's default base URL uses.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/services", get(list_services))
        .route("/portfolio", get(list_portfolio))
        .route("/testimonials", get(list_testimonials))
        .route("/statistics", get(list_statistics))
        .route("/faq", get(list_faq))
        .route("/contact", post(submit_contact))
        .layer(middleware::from_fn_with_state(state.clone(), outage_guard))
        .with_state(state);
    Router::new().nest("/api", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, router(state)).await
}

async fn outage_guard(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if state.options.outage {
        warn!(uri = %request.uri(), "simulated outage");
        let body = ApiResponse::<()> {
            success: false,
            message: None,
            data: None,
            errors: None,
        };
        return (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response();
    }
    next.run(request).await
}

async fn list_services(State(state): State<AppState>) -> Json<ApiResponse<Vec<Service>>> {
    let catalog = state.catalog.read().await;
    debug!(count = catalog.services.len(), "serving services");
    Json(ApiResponse::data(catalog.services.clone()))
}

async fn list_portfolio(State(state): State<AppState>) -> Json<ApiResponse<Vec<Project>>> {
    let catalog = state.catalog.read().await;
    debug!(count = catalog.portfolio.len(), "serving portfolio");
    Json(ApiResponse::data(catalog.portfolio.clone()))
}

async fn list_testimonials(State(state): State<AppState>) -> Json<ApiResponse<Vec<Testimonial>>> {
    let catalog = state.catalog.read().await;
    debug!(count = catalog.testimonials.len(), "serving testimonials");
    Json(ApiResponse::data(catalog.testimonials.clone()))
}

async fn list_statistics(State(state): State<AppState>) -> Json<ApiResponse<Vec<Statistic>>> {
    let catalog = state.catalog.read().await;
    debug!(count = catalog.statistics.len(), "serving statistics");
    Json(ApiResponse::data(catalog.statistics.clone()))
}

async fn list_faq(State(state): State<AppState>) -> Json<ApiResponse<Vec<Faq>>> {
    let catalog = state.catalog.read().await;
    debug!(count = catalog.faq.len(), "serving faq");
    Json(ApiResponse::data(catalog.faq.clone()))
}

async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactInput>, JsonRejection>,
) -> (StatusCode, Json<ApiResponse<()>>) {
    let Json(input) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::message(false, rejection.body_text())),
            );
        }
    };

    if let Err(errors) = input.validate() {
        let by_field = errors.field_errors();
        let fields = FieldMessages(
            ContactInput::FIELDS
                .iter()
                .filter_map(|field| {
                    let first = by_field.get(*field)?.first()?;
                    let message = first
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| first.code.to_string());
                    Some((field.to_string(), message))
                })
                .collect(),
        );
        debug!(fields = fields.len(), "contact submission rejected");
        let body = ApiResponse {
            success: false,
            message: Some("Validation failed".to_string()),
            data: None,
            errors: Some(fields),
        };
        return (StatusCode::BAD_REQUEST, Json(body));
    }

    let mut inbox = state.inbox.write().await;
    if state.options.contact_limit.is_some_and(|limit| inbox.len() >= limit) {
        warn!(accepted = inbox.len(), "contact rate limit reached");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ApiResponse::message(false, RATE_LIMIT_MESSAGE)),
        );
    }

    let submission = ContactSubmission {
        id: Uuid::new_v4(),
        name: input.name,
        email: input.email,
        message: input.message,
    };
    info!(id = %submission.id, "contact submission stored");
    inbox.push(submission);
    (
        StatusCode::OK,
        Json(ApiResponse::message(true, CONTACT_ACCEPTED)),
    )
}
