use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AuthConfig;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub id: i32,   // id utilisateur
    pub role: i16, // 0 = lecteur, >=1 = droits d'écriture
    pub iat: i64,
    pub exp: i64, // expiration timestamp
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// L'algorithme déclaré par le token n'est pas celui attendu (HS256)
    #[error("invalid signing method")]
    InvalidSigningMethod,
    #[error("token is expired")]
    Expired,
    #[error("invalid token signature")]
    InvalidSignature,
    #[error("malformed token")]
    Malformed,
    #[error("failed to generate token")]
    Creation,
}

/// Génère un JWT signé HS256 portant {id, role}, expirant à now + TTL
pub fn generate_token(user_id: i32, role: i16, cfg: &AuthConfig) -> Result<String, TokenError> {
    let now = Utc::now();
    let expiration = now
        .checked_add_signed(cfg.token_ttl)
        .ok_or(TokenError::Creation)?
        .timestamp();

    let claims = Claims {
        id: user_id,
        role,
        iat: now.timestamp(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(cfg.jwt_secret.as_ref()),
    )
    .map_err(|_| TokenError::Creation)
}

/// Vérifie et décode un JWT. Sans effet de bord : la validité ne dépend que
/// de la signature et de l'horloge, aucun état serveur.
pub fn verify_token(token: &str, cfg: &AuthConfig) -> Result<Claims, TokenError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(cfg.jwt_secret.as_ref()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::InvalidAlgorithm => TokenError::InvalidSigningMethod,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            password_salt: "test-salt".to_string(),
            token_ttl: Duration::hours(6),
        }
    }

    #[test]
    fn test_generate_and_verify_token() {
        let cfg = test_config();

        let token = generate_token(123, 1, &cfg).unwrap();
        let claims = verify_token(&token, &cfg).unwrap();

        assert_eq!(claims.id, 123);
        assert_eq!(claims.role, 1);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token() {
        let mut cfg = test_config();
        cfg.token_ttl = Duration::hours(-2);

        let token = generate_token(1, 0, &cfg).unwrap();
        let result = verify_token(&token, &cfg);

        assert_eq!(result.unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let cfg = test_config();
        let token = generate_token(1, 1, &cfg).unwrap();

        let mut other = test_config();
        other.jwt_secret = "another-secret".to_string();

        assert_eq!(
            verify_token(&token, &other).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[test]
    fn test_wrong_algorithm_rejected() {
        let cfg = test_config();
        let claims = Claims {
            id: 1,
            role: 1,
            iat: Utc::now().timestamp(),
            exp: Utc::now().timestamp() + 3600,
        };
        // token signé HS384 avec la bonne clé : refusé avant la signature
        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(cfg.jwt_secret.as_ref()),
        )
        .unwrap();

        assert_eq!(
            verify_token(&token, &cfg).unwrap_err(),
            TokenError::InvalidSigningMethod
        );
    }

    #[test]
    fn test_invalid_token() {
        let cfg = test_config();
        let result = verify_token("invalid.token.here", &cfg);
        assert_eq!(result.unwrap_err(), TokenError::Malformed);
    }
}
