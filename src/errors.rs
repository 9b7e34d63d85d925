// Taxonomie des erreurs de l'API.
// Chaque variante connaît son status HTTP ; le corps de réponse reprend le
// format {status, error} attendu par les clients existants.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use crate::models::dto::ResponseModel;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Payload invalide (shape/range), liste de relation vide, PATCH vide
    #[error("{0}")]
    Validation(String),

    /// Credentials ou token invalides
    #[error("{0}")]
    Unauthorized(String),

    /// Token valide mais role insuffisant pour une mutation
    #[error("You don't have permission for this operation.")]
    Forbidden,

    /// Aucune ligne pour ce nom, historiquement remonté en 500
    #[error("{0}")]
    NotFound(&'static str),

    /// GetAll/Search sans résultat, historiquement remonté en 500
    #[error("no data")]
    EmptyResult,

    /// Un acteur ou un film nommé dans la relation n'existe pas
    #[error("couldn't find film or actor")]
    RelationTargetNotFound,

    #[error("{0}")]
    Db(#[from] sea_orm::DbErr),

    #[error("{0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            // NotFound/EmptyResult restent en 500 pour compatibilité avec les
            // clients existants (voir DESIGN.md)
            ApiError::NotFound(_)
            | ApiError::EmptyResult
            | ApiError::RelationTargetNotFound
            | ApiError::Db(_)
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Error: {self}");
        } else {
            tracing::info!("Error: {self}");
        }

        HttpResponse::build(status).json(ResponseModel::error(self.to_string()))
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::Validation(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        ApiError::Unauthorized(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::validation("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::unauthorized("nope").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        // comportement historique : les résultats vides sortent en 500
        assert_eq!(
            ApiError::EmptyResult.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::NotFound("no actor").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::RelationTargetNotFound.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ApiError::RelationTargetNotFound.to_string(),
            "couldn't find film or actor"
        );
        assert_eq!(ApiError::EmptyResult.to_string(), "no data");
        assert_eq!(
            ApiError::Forbidden.to_string(),
            "You don't have permission for this operation."
        );
    }
}
