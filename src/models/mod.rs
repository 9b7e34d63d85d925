// ============================================================================
// MODELS - MODULE PRINCIPAL
// ============================================================================
//
// Description:
//   Point d'entrée pour tous les modèles de données.
//   Chaque modèle correspond à une table PostgreSQL avec SeaORM.
//
// Liste des modules:
//   - actor : Acteurs (nom, sexe, date de naissance, liste des films liés)
//   - film : Films (nom, date de sortie, note, description, liste des acteurs)
//   - users : Comptes (table "auth" : login, hash du mot de passe, role)
//   - dto : Data Transfer Objects pour les requêtes/réponses API
//
// Points d'attention:
//   - Les colonnes list_film / list_actor sont des text[] Postgres : chaque
//     côté de la relation acteur↔film duplique les noms de l'autre côté.
//     Leur cohérence est garantie uniquement par services::relation_service.
//
// ============================================================================

pub mod actor;
pub mod dto;
pub mod film;
pub mod users;
