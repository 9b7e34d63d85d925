// CRUD du catalogue acteurs/films.
// Les lectures passent par les entités SeaORM ; les PATCH partiels passent
// par UpdateBuilder pour ne toucher que les colonnes présentes.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, Order,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::errors::ApiError;
use crate::models::dto::{ActorData, FilmData};
use crate::models::{actor, film};
use crate::utils::update_builder::UpdateBuilder;

const BDATE_FORMAT_MSG: &str = "bdate should be '2000-01-01' format";
const RDATE_FORMAT_MSG: &str = "rdate should be '2000-01-01' format";

pub struct CatalogService;

// ----------------------------------------------------- Actor ----------------------------------------------------------

impl CatalogService {
    pub async fn create_actor(db: &DatabaseConnection, data: &ActorData) -> Result<(), ApiError> {
        let bdate = parse_date(&data.bdate, BDATE_FORMAT_MSG)?;

        actor::ActiveModel {
            actor_name: Set(data.name.clone()),
            sex: Set(data.sex.clone()),
            bdate: Set(bdate),
            list_film: Set(None),
            ..Default::default()
        }
        .insert(db)
        .await?;

        Ok(())
    }

    pub async fn get_actor(db: &DatabaseConnection, name: &str) -> Result<actor::Model, ApiError> {
        actor::Entity::find()
            .filter(actor::Column::ActorName.eq(name))
            .one(db)
            .await?
            .ok_or(ApiError::NotFound("no actor"))
    }

    pub async fn get_actors(
        db: &DatabaseConnection,
        sort: &str,
    ) -> Result<Vec<actor::Model>, ApiError> {
        let (column, order) = actor_sort(sort);

        let data = actor::Entity::find().order_by(column, order).all(db).await?;

        if data.is_empty() {
            return Err(ApiError::EmptyResult);
        }

        Ok(data)
    }

    /// PATCH partiel : seuls les champs non vides du payload sont poussés,
    /// dans l'ordre actor_name, sex, bdate. La ligne est visée par son nom
    /// courant ; zéro ligne touchée n'est pas une erreur.
    pub async fn update_actor(
        db: &DatabaseConnection,
        name: &str,
        data: &ActorData,
    ) -> Result<(), ApiError> {
        let mut builder = UpdateBuilder::new("actor", "actor_name");

        if !data.name.is_empty() {
            builder = builder.set("actor_name", data.name.as_str());
        }
        if !data.sex.is_empty() {
            builder = builder.set("sex", data.sex.as_str());
        }
        if !data.bdate.is_empty() {
            builder = builder.set("bdate", parse_date(&data.bdate, BDATE_FORMAT_MSG)?);
        }

        db.execute(builder.build(name)?).await?;

        Ok(())
    }

    pub async fn delete_actor(db: &DatabaseConnection, name: &str) -> Result<(), ApiError> {
        actor::Entity::delete_many()
            .filter(actor::Column::ActorName.eq(name))
            .exec(db)
            .await?;

        Ok(())
    }

    /// Recherche par sous-chaîne (sensible à la casse) sur le nom.
    pub async fn search_actors(
        db: &DatabaseConnection,
        pattern: &str,
    ) -> Result<Vec<String>, ApiError> {
        let names: Vec<String> = actor::Entity::find()
            .select_only()
            .column(actor::Column::ActorName)
            .filter(actor::Column::ActorName.contains(pattern))
            .into_tuple()
            .all(db)
            .await?;

        if names.is_empty() {
            return Err(ApiError::EmptyResult);
        }

        Ok(names)
    }
}

// ----------------------------------------------------- Film ----------------------------------------------------------

impl CatalogService {
    pub async fn create_film(db: &DatabaseConnection, data: &FilmData) -> Result<(), ApiError> {
        let release_date = parse_date(&data.rdate, RDATE_FORMAT_MSG)?;

        film::ActiveModel {
            film_name: Set(data.name.clone()),
            release_date: Set(release_date),
            rating: Set(data.rating),
            description: Set(Some(data.desc.clone())),
            list_actor: Set(None),
            ..Default::default()
        }
        .insert(db)
        .await?;

        Ok(())
    }

    pub async fn get_film(db: &DatabaseConnection, name: &str) -> Result<film::Model, ApiError> {
        film::Entity::find()
            .filter(film::Column::FilmName.eq(name))
            .one(db)
            .await?
            .ok_or(ApiError::NotFound("no film"))
    }

    pub async fn get_films(
        db: &DatabaseConnection,
        sort: &str,
    ) -> Result<Vec<film::Model>, ApiError> {
        let (column, order) = film_sort(sort);

        let data = film::Entity::find().order_by(column, order).all(db).await?;

        if data.is_empty() {
            return Err(ApiError::EmptyResult);
        }

        Ok(data)
    }

    /// PATCH partiel film, ordre fixe film_name, release_date, rating,
    /// description. Un rating à 0 signifie "pas de changement".
    pub async fn update_film(
        db: &DatabaseConnection,
        name: &str,
        data: &FilmData,
    ) -> Result<(), ApiError> {
        let mut builder = UpdateBuilder::new("film", "film_name");

        if !data.name.is_empty() {
            builder = builder.set("film_name", data.name.as_str());
        }
        if !data.rdate.is_empty() {
            builder = builder.set("release_date", parse_date(&data.rdate, RDATE_FORMAT_MSG)?);
        }
        if data.rating != 0.0 {
            builder = builder.set("rating", data.rating);
        }
        if !data.desc.is_empty() {
            builder = builder.set("description", data.desc.as_str());
        }

        db.execute(builder.build(name)?).await?;

        Ok(())
    }

    pub async fn delete_film(db: &DatabaseConnection, name: &str) -> Result<(), ApiError> {
        film::Entity::delete_many()
            .filter(film::Column::FilmName.eq(name))
            .exec(db)
            .await?;

        Ok(())
    }

    pub async fn search_films(
        db: &DatabaseConnection,
        pattern: &str,
    ) -> Result<Vec<String>, ApiError> {
        let names: Vec<String> = film::Entity::find()
            .select_only()
            .column(film::Column::FilmName)
            .filter(film::Column::FilmName.contains(pattern))
            .into_tuple()
            .all(db)
            .await?;

        if names.is_empty() {
            return Err(ApiError::EmptyResult);
        }

        Ok(names)
    }
}

// ----------------------------------------------------------------------------------------------------------------------

fn parse_date(value: &str, message: &'static str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ApiError::validation(message))
}

/// Clé de tri des acteurs, restreinte à l'allow-list ; tout le reste retombe
/// sur actor_name.
fn actor_sort(sort: &str) -> (actor::Column, Order) {
    match sort {
        "sex" => (actor::Column::Sex, Order::Asc),
        "bdate" => (actor::Column::Bdate, Order::Asc),
        _ => (actor::Column::ActorName, Order::Asc),
    }
}

/// Clé de tri des films. Le rating sort en décroissant, y compris quand il
/// sert de repli pour une clé inconnue.
fn film_sort(sort: &str) -> (film::Column, Order) {
    match sort {
        "film_name" => (film::Column::FilmName, Order::Asc),
        "release_date" => (film::Column::ReleaseDate, Order::Asc),
        "description" => (film::Column::Description, Order::Asc),
        _ => (film::Column::Rating, Order::Desc),
    }
}
