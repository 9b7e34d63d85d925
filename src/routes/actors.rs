use actix_web::{HttpRequest, HttpResponse, delete, get, patch, post, web};
use sea_orm::DatabaseConnection;

use crate::errors::ApiError;
use crate::middleware::AuthUser;
use crate::models::dto::{ActorData, ResponseModel};
use crate::routes::decode_name;
use crate::services::catalog_service::CatalogService;
use crate::utils::validation;

/// POST /api/actor/add - Ajouter un acteur (role > 0)
#[post("/add")]
pub async fn create_actor(
    auth_user: AuthUser,
    body: web::Json<ActorData>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    auth_user.require_privileged()?;
    tracing::info!("Request: CreateActor. User with ID:{}", auth_user.id);

    validation::validate_actor(&body)?;

    CatalogService::create_actor(db.get_ref(), &body).await?;

    Ok(HttpResponse::Ok().json(ResponseModel::ok()))
}

/// GET /api/actor/get/{name} - Lire un acteur (token suffit)
#[get("/get/{name}")]
pub async fn get_actor(
    auth_user: AuthUser,
    name: web::Path<String>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    tracing::info!("Request: GetActor. User with ID:{}", auth_user.id);

    let name = decode_name(&name);

    let actor = CatalogService::get_actor(db.get_ref(), &name).await?;

    Ok(HttpResponse::Ok().json(actor))
}

/// GET /api/actor/get_all - Lister les acteurs, tri via le header Sort
#[get("/get_all")]
pub async fn get_actors(
    auth_user: AuthUser,
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    tracing::info!("Request: GetActors. User with ID:{}", auth_user.id);

    let sort = req
        .headers()
        .get("Sort")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let actors = CatalogService::get_actors(db.get_ref(), sort).await?;

    Ok(HttpResponse::Ok().json(actors))
}

/// PATCH /api/actor/update/{name} - Mise à jour partielle (role > 0)
#[patch("/update/{name}")]
pub async fn update_actor(
    auth_user: AuthUser,
    name: web::Path<String>,
    body: web::Json<ActorData>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    auth_user.require_privileged()?;
    tracing::info!("Request: UpdateActor. User with ID:{}", auth_user.id);

    let name = decode_name(&name);

    CatalogService::update_actor(db.get_ref(), &name, &body).await?;

    Ok(HttpResponse::Ok().json(ResponseModel::ok()))
}

/// DELETE /api/actor/delete/{name} - Supprimer un acteur (role > 0)
#[delete("/delete/{name}")]
pub async fn delete_actor(
    auth_user: AuthUser,
    name: web::Path<String>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    auth_user.require_privileged()?;
    tracing::info!("Request: DeleteActor. User with ID:{}", auth_user.id);

    let name = decode_name(&name);

    CatalogService::delete_actor(db.get_ref(), &name).await?;

    Ok(HttpResponse::Ok().json(ResponseModel::ok()))
}

/// GET /api/actor/search/{pattern} - Recherche par sous-chaîne sur le nom
#[get("/search/{pattern}")]
pub async fn search_actors(
    auth_user: AuthUser,
    pattern: web::Path<String>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    tracing::info!("Request: SearchActor. User with ID:{}", auth_user.id);

    let pattern = decode_name(&pattern);

    let names = CatalogService::search_actors(db.get_ref(), &pattern).await?;

    Ok(HttpResponse::Ok().json(names))
}

pub fn actor_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/actor")
            .service(create_actor)
            .service(get_actor)
            .service(get_actors)
            .service(update_actor)
            .service(delete_actor)
            .service(search_actors),
    );
}
