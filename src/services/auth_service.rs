use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::config::AuthConfig;
use crate::errors::ApiError;
use crate::models::dto::SignInParams;
use crate::models::users;
use crate::utils::{jwt, password};

pub struct AuthService;

impl AuthService {
    /// Crée un compte : hash du mot de passe puis insertion.
    /// Tout nouveau compte est lecteur (role 0) ; l'élévation de role passe
    /// par un chemin d'administration hors API.
    pub async fn create_user(
        db: &DatabaseConnection,
        cfg: &AuthConfig,
        params: &SignInParams,
    ) -> Result<(), ApiError> {
        let password_hash = password::hash_password(&params.password, &cfg.password_salt);

        users::ActiveModel {
            login: Set(params.login.clone()),
            password: Set(password_hash),
            role: Set(0),
            ..Default::default()
        }
        .insert(db)
        .await?;

        Ok(())
    }

    /// Connexion : lookup par (login, hash) puis émission du JWT.
    pub async fn generate_token(
        db: &DatabaseConnection,
        cfg: &AuthConfig,
        params: &SignInParams,
    ) -> Result<String, ApiError> {
        let password_hash = password::hash_password(&params.password, &cfg.password_salt);

        let user = users::Entity::find()
            .filter(users::Column::Login.eq(&params.login))
            .filter(users::Column::Password.eq(&password_hash))
            .one(db)
            .await?
            .ok_or_else(|| ApiError::unauthorized("invalid login or password"))?;

        jwt::generate_token(user.id, user.role, cfg).map_err(|e| ApiError::Internal(e.to_string()))
    }
}
