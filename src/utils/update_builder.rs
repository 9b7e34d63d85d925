// Construction des UPDATE partiels (PATCH).
// Un payload PATCH ne porte qu'une partie des colonnes ; on assemble un
// statement paramétré qui ne touche que les champs présents, dans l'ordre
// d'insertion. La ligne cible est identifiée par son nom courant (pré-update).

use sea_orm::{DatabaseBackend, Statement, Value};

use crate::errors::ApiError;

pub struct UpdateBuilder {
    table: &'static str,
    key_column: &'static str,
    columns: Vec<&'static str>,
    values: Vec<Value>,
}

impl UpdateBuilder {
    pub fn new(table: &'static str, key_column: &'static str) -> Self {
        UpdateBuilder {
            table,
            key_column,
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Ajoute une assignation. L'ordre des appels est l'ordre des colonnes
    /// dans le SQL généré.
    pub fn set(mut self, column: &'static str, value: impl Into<Value>) -> Self {
        self.columns.push(column);
        self.values.push(value.into());
        self
    }

    /// Assemble le statement final :
    /// - une colonne  -> `UPDATE t SET col = $1 WHERE key = $2`
    /// - n colonnes   -> `UPDATE t SET (c1, .., cn) = ($1, .., $n) WHERE key = $n+1`
    pub fn build(mut self, key: &str) -> Result<Statement, ApiError> {
        if self.columns.is_empty() {
            return Err(ApiError::validation("no fields to update"));
        }

        let sql = if self.columns.len() == 1 {
            format!(
                "UPDATE {} SET {} = $1 WHERE {} = $2",
                self.table, self.columns[0], self.key_column
            )
        } else {
            let placeholders = (1..=self.columns.len())
                .map(|i| format!("${i}"))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "UPDATE {} SET ({}) = ({}) WHERE {} = ${}",
                self.table,
                self.columns.join(", "),
                placeholders,
                self.key_column,
                self.columns.len() + 1
            )
        };

        self.values.push(key.into());

        Ok(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            sql,
            self.values,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values_len(statement: &Statement) -> usize {
        statement.values.as_ref().map(|v| v.0.len()).unwrap_or(0)
    }

    #[test]
    fn test_single_field_uses_scalar_form() {
        let statement = UpdateBuilder::new("actor", "actor_name")
            .set("sex", "m")
            .build("Bruce Willis")
            .unwrap();

        assert_eq!(
            statement.sql,
            "UPDATE actor SET sex = $1 WHERE actor_name = $2"
        );
        assert_eq!(values_len(&statement), 2);
    }

    #[test]
    fn test_multi_field_uses_tuple_form() {
        let statement = UpdateBuilder::new("actor", "actor_name")
            .set("actor_name", "Bruce Willis")
            .set("sex", "m")
            .build("B. Willis")
            .unwrap();

        assert_eq!(
            statement.sql,
            "UPDATE actor SET (actor_name, sex) = ($1, $2) WHERE actor_name = $3"
        );
        assert_eq!(values_len(&statement), 3);
    }

    #[test]
    fn test_fields_keep_insertion_order() {
        let statement = UpdateBuilder::new("film", "film_name")
            .set("film_name", "Léon")
            .set("release_date", "1994-09-14")
            .set("rating", 8.5f32)
            .set("description", "The professional.")
            .build("Leon")
            .unwrap();

        assert_eq!(
            statement.sql,
            "UPDATE film SET (film_name, release_date, rating, description) = \
             ($1, $2, $3, $4) WHERE film_name = $5"
        );
        assert_eq!(values_len(&statement), 5);
    }

    #[test]
    fn test_empty_update_is_rejected() {
        let result = UpdateBuilder::new("actor", "actor_name").build("Anyone");

        assert_eq!(result.unwrap_err().to_string(), "no fields to update");
    }
}
