use actix_web::{web, HttpResponse};
use tracing::{error, info};

use crate::auth::service::AuthRequest;
use crate::auth::validation::validate_auth_request;
use crate::error::AppError;
use crate::AppState;

pub async fn register(
    req: web::Json<AuthRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    info!("Received registration request for email: {}", req.email);
    validate_auth_request(&req)?;

    match state.credentials.register(&req).await {
        Ok(token) => {
            info!("Registration successful for email: {}", req.email);
            Ok(HttpResponse::Created().json(token))
        }
        Err(e) => {
            error!("Registration failed for email: {}: {}", req.email, e);
            Err(e)
        }
    }
}

pub async fn login(
    req: web::Json<AuthRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    info!("Received login request for email: {}", req.email);
    validate_auth_request(&req)?;

    match state.credentials.login(&req).await {
        Ok(token) => {
            info!("Login successful for email: {}", req.email);
            Ok(HttpResponse::Ok().json(token))
        }
        Err(e) => {
            error!("Login failed for email: {}: {}", req.email, e);
            Err(e)
        }
    }
}
