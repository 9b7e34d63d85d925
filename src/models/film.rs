use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "film")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_serializing)]
    pub id: i32,
    #[serde(rename = "name")]
    pub film_name: String,
    #[serde(rename = "rdate")]
    pub release_date: Date,
    pub rating: f32,
    #[serde(rename = "desc")]
    pub description: Option<String>,
    #[serde(rename = "actors")]
    pub list_actor: Option<Vec<String>>,
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
            id: 7,
            film_name: "The Fifth Element".to_string(),
            release_date: NaiveDate::from_ymd_opt(1997, 5, 7).unwrap(),
            rating: 7.5,
            description: Some("A cab driver saves the world.".to_string()),
            list_actor: None,
        };

        let json = serde_json::to_value(&model).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "The Fifth Element",
                "rdate": "1997-05-07",
                "rating": 7.5,
                "desc": "A cab driver saves the world.",
                "actors": null,
            })
        );
    }
}
