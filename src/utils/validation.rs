// Validation des payloads acteur/film et du login.
// Fonctions pures, sans I/O. La première règle en échec gagne et son message
// part tel quel au client ; l'ordre des contrôles fait partie du contrat.

use regex::Regex;
use std::sync::LazyLock;

use crate::errors::ApiError;
use crate::models::dto::{ActorData, FilmData};

// Contrôle de forme uniquement, pas un calendrier : "9999-99-99" passe,
// c'est la base qui tranchera.
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("valid date pattern"));

static LOGIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9@.]+").expect("valid login pattern"));

pub fn validate_login(login: &str) -> Result<(), ApiError> {
    if !LOGIN_PATTERN.is_match(login) {
        return Err(ApiError::validation(
            "login must contain the characters a-z, A-z, 0-9, @ and .",
        ));
    }

    Ok(())
}

pub fn validate_actor(data: &ActorData) -> Result<(), ApiError> {
    if data.name.is_empty() || data.name.len() > 100 {
        return Err(ApiError::validation("size Name should be [1;100]"));
    }
    if data.sex != "m" && data.sex != "f" {
        return Err(ApiError::validation(
            "sex should be 'm' - male or 'f' - female",
        ));
    }
    if !DATE_PATTERN.is_match(&data.bdate) {
        return Err(ApiError::validation("bdate should be '2000-01-01' format"));
    }

    Ok(())
}

pub fn validate_film(data: &FilmData) -> Result<(), ApiError> {
    if data.name.is_empty() || data.name.len() > 150 {
        return Err(ApiError::validation("size Name should be [1;150]"));
    }
    if data.rating <= 0.0 || data.rating > 10.0 {
        return Err(ApiError::validation("rating should be (0;10]"));
    }
    if !DATE_PATTERN.is_match(&data.rdate) {
        return Err(ApiError::validation("rdate should be '2000-01-01' format"));
    }
    if data.desc.len() > 1000 {
        return Err(ApiError::validation(
            "size Description should be < 1000 symbols",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_actor() -> ActorData {
        ActorData {
            name: "Milla Jovovich".to_string(),
            sex: "f".to_string(),
            bdate: "1975-12-17".to_string(),
        }
    }

    fn valid_film() -> FilmData {
        FilmData {
            name: "The Fifth Element".to_string(),
            rdate: "1997-05-07".to_string(),
            rating: 7.6,
            desc: "A cab driver saves the world.".to_string(),
        }
    }

    #[test]
    fn test_valid_payloads_pass() {
        assert!(validate_actor(&valid_actor()).is_ok());
        assert!(validate_film(&valid_film()).is_ok());
    }

    #[test]
    fn test_actor_name_bounds() {
        let mut actor = valid_actor();
        actor.name = String::new();
        assert_eq!(
            validate_actor(&actor).unwrap_err().to_string(),
            "size Name should be [1;100]"
        );

        actor.name = "x".repeat(101);
        assert_eq!(
            validate_actor(&actor).unwrap_err().to_string(),
            "size Name should be [1;100]"
        );
    }

    #[test]
    fn test_actor_name_checked_before_sex() {
        // la première règle en échec gagne
        let actor = ActorData {
            name: String::new(),
            sex: "x".to_string(),
            bdate: "oops".to_string(),
        };
        assert_eq!(
            validate_actor(&actor).unwrap_err().to_string(),
            "size Name should be [1;100]"
        );
    }

    #[test]
    fn test_actor_sex_values() {
        let mut actor = valid_actor();
        actor.sex = "x".to_string();
        assert_eq!(
            validate_actor(&actor).unwrap_err().to_string(),
            "sex should be 'm' - male or 'f' - female"
        );

        actor.sex = "m".to_string();
        assert!(validate_actor(&actor).is_ok());
    }

    #[test]
    fn test_actor_date_shape() {
        let mut actor = valid_actor();
        actor.bdate = "17/12/1975".to_string();
        assert_eq!(
            validate_actor(&actor).unwrap_err().to_string(),
            "bdate should be '2000-01-01' format"
        );

        // contrôle de forme, pas de calendrier
        actor.bdate = "9999-99-99".to_string();
        assert!(validate_actor(&actor).is_ok());
    }

    #[test]
    fn test_film_name_bounds() {
        let mut film = valid_film();
        film.name = "x".repeat(151);
        assert_eq!(
            validate_film(&film).unwrap_err().to_string(),
            "size Name should be [1;150]"
        );
    }

    #[test]
    fn test_film_rating_range() {
        let mut film = valid_film();
        film.rating = 0.0;
        assert_eq!(
            validate_film(&film).unwrap_err().to_string(),
            "rating should be (0;10]"
        );

        film.rating = 10.5;
        assert_eq!(
            validate_film(&film).unwrap_err().to_string(),
            "rating should be (0;10]"
        );

        film.rating = 10.0;
        assert!(validate_film(&film).is_ok());
    }

    #[test]
    fn test_film_rating_checked_before_date() {
        let mut film = valid_film();
        film.rating = 0.0;
        film.rdate = "oops".to_string();
        assert_eq!(
            validate_film(&film).unwrap_err().to_string(),
            "rating should be (0;10]"
        );
    }

    #[test]
    fn test_film_description_length() {
        let mut film = valid_film();
        film.desc = "x".repeat(1001);
        assert_eq!(
            validate_film(&film).unwrap_err().to_string(),
            "size Description should be < 1000 symbols"
        );

        film.desc = "x".repeat(1000);
        assert!(validate_film(&film).is_ok());
    }

    #[test]
    fn test_login_pattern() {
        assert!(validate_login("user@mail.com").is_ok());
        assert!(validate_login("User123").is_ok());
        assert_eq!(
            validate_login("!!!").unwrap_err().to_string(),
            "login must contain the characters a-z, A-z, 0-9, @ and ."
        );
    }
}
