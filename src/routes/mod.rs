pub mod actors;
pub mod auth;
pub mod films;
pub mod relations;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    auth::auth_routes(cfg);
    cfg.service(
        web::scope("/api")
            .configure(actors::actor_routes)
            .configure(films::film_routes)
            .configure(relations::relation_routes),
    );
}

/// Les segments de path encodent l'espace avec '+' (convention des clients
/// historiques) : "Milla+Jovovich" -> "Milla Jovovich".
pub(crate) fn decode_name(raw: &str) -> String {
    raw.replace('+', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_name() {
        assert_eq!(decode_name("Milla+Jovovich"), "Milla Jovovich");
        assert_eq!(decode_name("Leon"), "Leon");
        assert_eq!(decode_name("a+b+c"), "a b c");
    }
}
