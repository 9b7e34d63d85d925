use actix_web::{HttpResponse, post, web};
use sea_orm::DatabaseConnection;

use crate::config::AuthConfig;
use crate::errors::ApiError;
use crate::models::dto::{ResponseModel, SignInParams, SignInResponse};
use crate::services::auth_service::AuthService;
use crate::utils::validation;

/// POST /auth/signUp - Créer un compte (PUBLIC)
#[post("/signUp")]
pub async fn sign_up(
    body: web::Json<SignInParams>,
    db: web::Data<DatabaseConnection>,
    cfg: web::Data<AuthConfig>,
) -> Result<HttpResponse, ApiError> {
    tracing::info!("Request: SignUp");

    validation::validate_login(&body.login)?;

    AuthService::create_user(db.get_ref(), cfg.get_ref(), &body).await?;

    Ok(HttpResponse::Ok().json(ResponseModel::ok()))
}

/// POST /auth/signIn - Se connecter, renvoie le token (PUBLIC)
#[post("/signIn")]
pub async fn sign_in(
    body: web::Json<SignInParams>,
    db: web::Data<DatabaseConnection>,
    cfg: web::Data<AuthConfig>,
) -> Result<HttpResponse, ApiError> {
    tracing::info!("Request: SignIn");

    validation::validate_login(&body.login)?;

    let token = AuthService::generate_token(db.get_ref(), cfg.get_ref(), &body).await?;

    Ok(HttpResponse::Ok().json(SignInResponse { token }))
}

pub fn auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/auth").service(sign_up).service(sign_in));
}
