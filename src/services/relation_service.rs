// Maintenance des relations acteur↔film.
// La relation est dupliquée des deux côtés (actor.list_film et
// film.list_actor) : chaque opération doit toucher les deux listes dans la
// même transaction, sinon une moitié de relation resterait en base.

use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement, TransactionTrait, Value,
};

use crate::errors::ApiError;
use crate::models::dto::{AddActorsByFilmParams, AddFilmsByActorParams, DeleteActorFilmParams};

pub struct RelationService;

impl RelationService {
    /// Relie un acteur à une liste de films : les noms de films entrent dans
    /// actor.list_film, le nom de l'acteur entre dans le list_actor de chaque
    /// film. Tout ou rien.
    pub async fn add_films_by_actor(
        db: &DatabaseConnection,
        params: &AddFilmsByActorParams,
    ) -> Result<(), ApiError> {
        if params.films.is_empty() {
            return Err(ApiError::validation("len data should be > 0"));
        }

        let statements = append_statements(
            LinkSide {
                table: "actor",
                key_column: "actor_name",
                list_column: "list_film",
            },
            LinkSide {
                table: "film",
                key_column: "film_name",
                list_column: "list_actor",
            },
            &params.actor,
            &params.films,
        );

        execute_atomically(db, statements).await
    }

    /// Miroir symétrique : relie un film à une liste d'acteurs.
    pub async fn add_actors_by_film(
        db: &DatabaseConnection,
        params: &AddActorsByFilmParams,
    ) -> Result<(), ApiError> {
        if params.actors.is_empty() {
            return Err(ApiError::validation("len data should be > 0"));
        }

        let statements = append_statements(
            LinkSide {
                table: "film",
                key_column: "film_name",
                list_column: "list_actor",
            },
            LinkSide {
                table: "actor",
                key_column: "actor_name",
                list_column: "list_film",
            },
            &params.film,
            &params.actors,
        );

        execute_atomically(db, statements).await
    }

    /// Supprime la paire des deux côtés. Une relation à moitié absente (ligne
    /// acteur ou film introuvable) fait échouer l'ensemble.
    pub async fn delete_actor_film(
        db: &DatabaseConnection,
        params: &DeleteActorFilmParams,
    ) -> Result<(), ApiError> {
        let statements = remove_statements(&params.film, &params.actor);

        execute_atomically(db, statements).await
    }
}

/// Un côté de la relation : sa table, sa colonne clé et sa colonne liste.
struct LinkSide {
    table: &'static str,
    key_column: &'static str,
    list_column: &'static str,
}

/// Statements d'ajout : d'abord tous les noms d'en face dans la liste du
/// propriétaire, puis le nom du propriétaire dans la liste de chaque entrée
/// d'en face. L'insert est ensembliste :
/// array_agg(DISTINCT ...) sur l'union élimine les doublons, un nom déjà
/// présent ne crée donc pas de deuxième entrée.
fn append_statements(owner: LinkSide, other: LinkSide, owner_name: &str, other_names: &[String]) -> Vec<Statement> {
    let mut statements = Vec::with_capacity(other_names.len() + 1);

    statements.push(Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        format!(
            "UPDATE {} SET {} = (SELECT array_agg(DISTINCT e) \
             FROM unnest(coalesce({}, '{{}}') || $1) AS e) WHERE {} = $2",
            owner.table, owner.list_column, owner.list_column, owner.key_column
        ),
        [
            Value::from(other_names.to_vec()),
            Value::from(owner_name),
        ],
    ));

    for other_name in other_names {
        statements.push(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!(
                "UPDATE {} SET {} = (SELECT array_agg(DISTINCT e) \
                 FROM unnest(coalesce({}, '{{}}') || $1) AS e) WHERE {} = $2",
                other.table, other.list_column, other.list_column, other.key_column
            ),
            [
                Value::from(vec![owner_name.to_string()]),
                Value::from(other_name.as_str()),
            ],
        ));
    }

    statements
}

/// Statements de suppression : l'acteur sort de la liste du film, le film
/// sort de la liste de l'acteur.
fn remove_statements(film: &str, actor: &str) -> Vec<Statement> {
    vec![
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "UPDATE film SET list_actor = array_remove(list_actor, $1) WHERE film_name = $2",
            [Value::from(actor), Value::from(film)],
        ),
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "UPDATE actor SET list_film = array_remove(list_film, $1) WHERE actor_name = $2",
            [Value::from(film), Value::from(actor)],
        ),
    ]
}

/// Exécute les statements dans une transaction unique. Un statement qui ne
/// touche aucune ligne signifie qu'un acteur ou un film nommé n'existe pas :
/// rollback complet. Une erreur du store abandonne aussi la transaction
/// (rollback au drop).
async fn execute_atomically(
    db: &DatabaseConnection,
    statements: Vec<Statement>,
) -> Result<(), ApiError> {
    let txn = db.begin().await?;

    for statement in statements {
        let result = txn.execute(statement).await?;

        if result.rows_affected() == 0 {
            txn.rollback().await?;
            return Err(ApiError::RelationTargetNotFound);
        }
    }

    txn.commit().await?;

    Ok(())
}
