// connexion BD + création du schéma au démarrage

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr};

pub async fn establish_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}

/// Crée les trois tables si elles n'existent pas encore.
/// Les colonnes list_film / list_actor sont des text[] : chaque côté de la
/// relation acteur↔film porte la liste des noms de l'autre côté.
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let schema = r#"
        CREATE TABLE IF NOT EXISTS "actor"
        (
            id         serial       not null unique,
            actor_name varchar(100) not null,
            sex        varchar(1)   not null,
            bdate      date         not null,
            list_film  text[]
        );
        CREATE TABLE IF NOT EXISTS "film"
        (
            id           serial       not null unique,
            film_name    varchar(150) not null,
            release_date date         not null,
            rating       real         not null,
            description  varchar(1000),
            list_actor   text[]
        );
        CREATE TABLE IF NOT EXISTS "auth"
        (
            id       serial       not null unique,
            login    varchar(255) not null unique,
            password text         not null,
            role     smallint     default 0
        );
    "#;

    db.execute_unprepared(schema).await?;

    Ok(())
}
