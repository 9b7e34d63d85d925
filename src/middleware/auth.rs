use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures::future::{Ready, ready};

use crate::config::AuthConfig;
use crate::errors::ApiError;
use crate::utils::jwt;

/// Structure qui contient les infos de l'utilisateur authentifié.
/// Utilisée comme extracteur dans les routes protégées : remplace le
/// context-value non typé du protocole historique.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i32,
    pub role: i16,
}

impl AuthUser {
    /// Les mutations du catalogue exigent un role > 0 ; la lecture se
    /// contente d'un token valide.
    pub fn require_privileged(&self) -> Result<(), ApiError> {
        if self.role == 0 {
            return Err(ApiError::Forbidden);
        }
        Ok(())
    }
}

/// Implémentation de FromRequest pour AuthUser.
/// Cela permet à Actix-Web d'extraire automatiquement AuthUser des requêtes.
impl FromRequest for AuthUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_user(req))
    }
}

fn extract_user(req: &HttpRequest) -> Result<AuthUser, ApiError> {
    // 1. Extraire le header Authorization
    let header = req
        .headers()
        .get("Authorization")
        .ok_or_else(|| ApiError::unauthorized("empty auth header"))?;

    let header = header
        .to_str()
        .map_err(|_| ApiError::unauthorized("invalid auth header"))?;

    // 2. Le header doit faire exactement deux parties : "Bearer <token>"
    let parts: Vec<&str> = header.split(' ').collect();
    if parts.len() != 2 {
        return Err(ApiError::unauthorized("invalid auth header"));
    }

    // 3. Vérifier le token JWT
    let cfg = req
        .app_data::<web::Data<AuthConfig>>()
        .ok_or_else(|| ApiError::Internal("auth config is not configured".to_string()))?;

    let claims =
        jwt::verify_token(parts[1], cfg).map_err(|e| ApiError::unauthorized(e.to_string()))?;

    // 4. Exposer l'identité au handler
    Ok(AuthUser {
        id: claims.id,
        role: claims.role,
    })
}
