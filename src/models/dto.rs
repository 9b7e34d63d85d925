// DTOs des requêtes et réponses API.
// Les champs texte absents du JSON arrivent en chaîne vide (serde default),
// comme les zero-values du protocole historique : pour un PATCH, champ vide
// ou rating à 0 signifie "ne pas toucher".

use serde::{Deserialize, Serialize};

// DTO pour l'inscription et la connexion
#[derive(Debug, Deserialize)]
pub struct SignInParams {
    pub login: String,
    pub password: String,
}

// Réponse après signIn
#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub token: String,
}

// Payload acteur (création et PATCH partiel)
#[derive(Debug, Default, Deserialize)]
pub struct ActorData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sex: String,
    #[serde(default)]
    pub bdate: String,
}

// Payload film (création et PATCH partiel)
#[derive(Debug, Default, Deserialize)]
pub struct FilmData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rdate: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub desc: String,
}

// Paramètres des opérations de relation acteur↔film
#[derive(Debug, Deserialize)]
pub struct AddFilmsByActorParams {
    pub actor: String,
    pub films: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddActorsByFilmParams {
    pub film: String,
    pub actors: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteActorFilmParams {
    pub film: String,
    pub actor: String,
}

/// Réponse générique {status, error} des mutations
#[derive(Debug, Serialize)]
pub struct ResponseModel {
    pub status: &'static str,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
}

impl ResponseModel {
    pub fn ok() -> Self {
        ResponseModel {
            status: "OK",
            error: String::new(),
        }
    }

    pub fn error(message: String) -> Self {
        ResponseModel {
            status: "error",
            error: message,
        }
    }
}
