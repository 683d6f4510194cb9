use crate::application::auth_service::AuthService;
use crate::application::nutrition_service::NutritionService;
use crate::data::food_catalog::StaticFoodCatalog;
use crate::data::user_repository::InMemoryUserRepository;
use crate::domain::error::DomainError;
use crate::domain::response::{AuthResponse, NutritionResponse};
use crate::domain::user::{LoginRequest, RegisterRequest};
use crate::presentation::middleware::{SESSION_COOKIE, SessionUser};
use crate::presentation::pages;
use crate::presentation::render::render_sections;
use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::{HttpResponse, ResponseError, web};
use chrono::Utc;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

pub const DATASET_UNAVAILABLE: &str = "Could not load nutrition data. Please try again later.";

pub struct AppState {
    pub auth: AuthService<InMemoryUserRepository>,
    pub nutrition: NutritionService<StaticFoodCatalog>,
}

/// Failures that surface as HTTP error statuses. Logical rejections of a
/// submission never take this path; those are reported inside a 200
/// envelope so the message reaches the form.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match self {
            ApiError::Unauthorized(_) => actix_web::http::StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = match self {
            ApiError::Unauthorized(msg) => {
                warn!(error = %msg, status = %status, "Unauthorized");
                msg.clone()
            }
            ApiError::Internal(msg) => {
                // The raw error stays in the log; the client gets a
                // generic message.
                error!(error = %msg, status = %status, "Internal error");
                "Internal server error".to_string()
            }
        };

        HttpResponse::build(status).json(AuthResponse::rejected(message))
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast_ref::<DomainError>() {
            Some(DomainError::Unauthorized) => ApiError::Unauthorized("Unauthorized".to_string()),
            Some(DomainError::Internal(msg)) => ApiError::Internal(msg.clone()),
            _ => ApiError::Internal(err.to_string()),
        }
    }
}

/// Message to show the user when a submission was rejected for a reason
/// the user can fix. Anything else escalates to `ApiError`.
fn rejection_message(err: &anyhow::Error) -> Option<String> {
    match err.downcast_ref::<DomainError>() {
        Some(DomainError::Validation(msg)) => Some(msg.clone()),
        Some(rejection @ DomainError::InvalidCredentials) => Some(rejection.to_string()),
        _ => None,
    }
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .finish()
}

fn redirect_to(path: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, path.to_string()))
        .finish()
}

// Handlers

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    timestamp: String,
}

#[instrument]
pub async fn health_check() -> HttpResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    };
    HttpResponse::Ok().json(response)
}

#[instrument]
pub async fn home() -> HttpResponse {
    redirect_to("/login")
}

#[instrument]
pub async fn auth_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(pages::auth_page())
}

#[instrument(skip(state, req), fields(phone = %req.phone))]
pub async fn register(
    state: web::Data<AppState>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    info!("Registration request received");
    match state.auth.register(req.into_inner()).await {
        Ok(session) => {
            info!(user_id = %session.user.id, "Registration succeeded");
            Ok(HttpResponse::Ok()
                .cookie(session_cookie(session.token))
                .json(AuthResponse::ok()))
        }
        Err(e) => match rejection_message(&e) {
            Some(message) => {
                warn!(message = %message, "Registration rejected");
                Ok(HttpResponse::Ok().json(AuthResponse::rejected(message)))
            }
            None => Err(ApiError::from(e)),
        },
    }
}

#[instrument(skip(state, req), fields(phone = %req.phone))]
pub async fn login(
    state: web::Data<AppState>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    info!("Login request received");
    match state.auth.login(req.into_inner()).await {
        Ok(session) => {
            info!(user_id = %session.user.id, "Login succeeded");
            Ok(HttpResponse::Ok()
                .cookie(session_cookie(session.token))
                .json(AuthResponse::ok()))
        }
        Err(e) => match rejection_message(&e) {
            Some(message) => {
                warn!(message = %message, "Login rejected");
                Ok(HttpResponse::Ok().json(AuthResponse::rejected(message)))
            }
            None => Err(ApiError::from(e)),
        },
    }
}

#[instrument]
pub async fn logout() -> HttpResponse {
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");
    cookie.make_removal();
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/login".to_string()))
        .cookie(cookie)
        .finish()
}

/// Server-rendered dashboard. Without a valid session the browser is sent
/// back to the auth page; with one, the whole dataset is rendered in a
/// single pass or not at all.
#[instrument(skip(state, user))]
pub async fn dashboard(state: web::Data<AppState>, user: Option<SessionUser>) -> HttpResponse {
    let Some(user) = user else {
        return redirect_to("/login");
    };

    let body = match state.nutrition.list_foods().await {
        Ok(foods) => {
            let sections = render_sections(&foods);
            info!(
                user_id = %user.user_id,
                healthy = sections.healthy.len(),
                junk = sections.junk.len(),
                "Dashboard rendered"
            );
            pages::dashboard_page(&sections)
        }
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Failed to load nutrition dataset");
            pages::dashboard_failure_page(DATASET_UNAVAILABLE)
        }
    };

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

#[instrument(skip(state, user), fields(user_id = %user.user_id))]
pub async fn nutrition(
    state: web::Data<AppState>,
    user: SessionUser,
) -> Result<HttpResponse, ApiError> {
    let foods = state.nutrition.list_foods().await.map_err(|e| {
        error!(error = %e, "Failed to load nutrition dataset");
        ApiError::from(e)
    })?;
    info!(count = foods.len(), "Nutrition dataset served");
    Ok(HttpResponse::Ok().json(NutritionResponse::ok(foods)))
}
