use actix_web::{HttpResponse, delete, post, web};
use sea_orm::DatabaseConnection;

use crate::errors::ApiError;
use crate::middleware::AuthUser;
use crate::models::dto::{
    AddActorsByFilmParams, AddFilmsByActorParams, DeleteActorFilmParams, ResponseModel,
};
use crate::services::relation_service::RelationService;

/// POST /api/relation/films_by_actor - Relier un acteur à des films (role > 0)
#[post("/films_by_actor")]
pub async fn add_films_by_actor(
    auth_user: AuthUser,
    body: web::Json<AddFilmsByActorParams>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    auth_user.require_privileged()?;
    tracing::info!("Request: AddFilmsByActor. User with ID:{}", auth_user.id);

    RelationService::add_films_by_actor(db.get_ref(), &body).await?;

    Ok(HttpResponse::Ok().json(ResponseModel::ok()))
}

/// POST /api/relation/actors_by_film - Relier un film à des acteurs (role > 0)
#[post("/actors_by_film")]
pub async fn add_actors_by_film(
    auth_user: AuthUser,
    body: web::Json<AddActorsByFilmParams>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    auth_user.require_privileged()?;
    tracing::info!("Request: AddActorsByFilm. User with ID:{}", auth_user.id);

    RelationService::add_actors_by_film(db.get_ref(), &body).await?;

    Ok(HttpResponse::Ok().json(ResponseModel::ok()))
}

/// DELETE /api/relation/delete - Supprimer une paire acteur↔film (role > 0)
#[delete("/delete")]
pub async fn delete_actor_film(
    auth_user: AuthUser,
    body: web::Json<DeleteActorFilmParams>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    auth_user.require_privileged()?;
    tracing::info!("Request: DeleteActorFilm. User with ID:{}", auth_user.id);

    RelationService::delete_actor_film(db.get_ref(), &body).await?;

    Ok(HttpResponse::Ok().json(ResponseModel::ok()))
}

pub fn relation_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/relation")
            .service(add_films_by_actor)
            .service(add_actors_by_film)
            .service(delete_actor_film),
    );
}
