use actix_web::{HttpRequest, HttpResponse, delete, get, patch, post, web};
use sea_orm::DatabaseConnection;

use crate::errors::ApiError;
use crate::middleware::AuthUser;
use crate::models::dto::{FilmData, ResponseModel};
use crate::routes::decode_name;
use crate::services::catalog_service::CatalogService;
use crate::utils::validation;

/// POST /api/film/add - Ajouter un film (role > 0)
#[post("/add")]
pub async fn create_film(
    auth_user: AuthUser,
    body: web::Json<FilmData>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    auth_user.require_privileged()?;
    tracing::info!("Request: CreateFilm. User with ID:{}", auth_user.id);

    validation::validate_film(&body)?;

    CatalogService::create_film(db.get_ref(), &body).await?;

    Ok(HttpResponse::Ok().json(ResponseModel::ok()))
}

/// GET /api/film/get/{name} - Lire un film (token suffit)
#[get("/get/{name}")]
pub async fn get_film(
    auth_user: AuthUser,
    name: web::Path<String>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    tracing::info!("Request: GetFilm. User with ID:{}", auth_user.id);

    let name = decode_name(&name);

    let film = CatalogService::get_film(db.get_ref(), &name).await?;

    Ok(HttpResponse::Ok().json(film))
}

/// GET /api/film/get_all - Lister les films, tri via le header Sort
#[get("/get_all")]
pub async fn get_films(
    auth_user: AuthUser,
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    tracing::info!("Request: GetFilms. User with ID:{}", auth_user.id);

    let sort = req
        .headers()
        .get("Sort")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let films = CatalogService::get_films(db.get_ref(), sort).await?;

    Ok(HttpResponse::Ok().json(films))
}

/// PATCH /api/film/update/{name} - Mise à jour partielle (role > 0)
#[patch("/update/{name}")]
pub async fn update_film(
    auth_user: AuthUser,
    name: web::Path<String>,
    body: web::Json<FilmData>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    auth_user.require_privileged()?;
    tracing::info!("Request: UpdateFilm. User with ID:{}", auth_user.id);

    let name = decode_name(&name);

    CatalogService::update_film(db.get_ref(), &name, &body).await?;

    Ok(HttpResponse::Ok().json(ResponseModel::ok()))
}

/// DELETE /api/film/delete/{name} - Supprimer un film (role > 0)
#[delete("/delete/{name}")]
pub async fn delete_film(
    auth_user: AuthUser,
    name: web::Path<String>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    auth_user.require_privileged()?;
    tracing::info!("Request: DeleteFilm. User with ID:{}", auth_user.id);

    let name = decode_name(&name);

    CatalogService::delete_film(db.get_ref(), &name).await?;

    Ok(HttpResponse::Ok().json(ResponseModel::ok()))
}

/// GET /api/film/search/{pattern} - Recherche par sous-chaîne sur le nom
#[get("/search/{pattern}")]
pub async fn search_films(
    auth_user: AuthUser,
    pattern: web::Path<String>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    tracing::info!("Request: SearchFilms. User with ID:{}", auth_user.id);

    let pattern = decode_name(&pattern);

    let names = CatalogService::search_films(db.get_ref(), &pattern).await?;

    Ok(HttpResponse::Ok().json(names))
}

pub fn film_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/film")
            .service(create_film)
            .service(get_film)
            .service(get_films)
            .service(update_film)
            .service(delete_film)
            .service(search_films),
    );
}
