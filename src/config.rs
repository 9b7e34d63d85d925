// Configuration du process, chargée une seule fois au démarrage.
// Les constantes sensibles (clé JWT, salt) viennent de l'environnement
// et restent immuables ensuite, injectées dans les handlers via web::Data.

use chrono::Duration;
use std::env;

/// Paramètres de l'authentification (Token Service + hash des mots de passe)
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub password_salt: String,
    pub token_ttl: Duration,
}

/// Configuration complète de l'application
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("⚠️  JWT_SECRET not found in .env, using default (INSECURE)");
            "default-insecure-key-change-this".to_string()
        });

        let password_salt = env::var("PASSWORD_SALT").unwrap_or_else(|_| {
            tracing::warn!("⚠️  PASSWORD_SALT not found in .env, using default (INSECURE)");
            "default-insecure-salt".to_string()
        });

        let token_ttl_hours = env::var("TOKEN_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(6);

        AppConfig {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(8080),
            database_url: env::var("DATABASE_URL")
                .expect("DATABASE_URL must be set in .env file"),
            auth: AuthConfig {
                jwt_secret,
                password_salt,
                token_ttl: Duration::hours(token_ttl_hours),
            },
        }
    }
}
