use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "actor")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_serializing)] // l'id surrogate ne sort jamais en JSON
    pub id: i32,
    #[serde(rename = "name")]
    pub actor_name: String,
    pub sex: String,
    pub bdate: Date,
    #[serde(rename = "films")]
    pub list_film: Option<Vec<String>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_json_shape() {
        let model = Model {
            id: 42,
            actor_name: "Milla Jovovich".to_string(),
            sex: "f".to_string(),
            bdate: NaiveDate::from_ymd_opt(1975, 12, 17).unwrap(),
            list_film: Some(vec!["The Fifth Element".to_string()]),
        };

        let json = serde_json::to_value(&model).unwrap();

        // l'id surrogate reste interne, les colonnes sortent sous leurs noms API
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Milla Jovovich",
                "sex": "f",
                "bdate": "1975-12-17",
                "films": ["The Fifth Element"],
            })
        );
    }
}
