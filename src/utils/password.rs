use sha2::{Digest, Sha256};

/// Hash un mot de passe avec le salt global du process.
/// Format stocké : hex(salt) suivi de hex(sha256(password)), le même que
/// celui des comptes déjà en base (voir DESIGN.md sur les limites du schéma).
pub fn hash_password(password: &str, salt: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    format!("{}{}", hex::encode(salt.as_bytes()), hex::encode(digest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        let a = hash_password("secret", "pepper");
        let b = hash_password("secret", "pepper");
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_is_salt_prefixed() {
        let hashed = hash_password("secret", "pepper");
        assert!(hashed.starts_with(&hex::encode("pepper")));
        // salt hex + 32 octets de digest en hex
        assert_eq!(hashed.len(), "pepper".len() * 2 + 64);
    }

    #[test]
    fn test_hash_differs_by_password_and_salt() {
        assert_ne!(hash_password("secret", "pepper"), hash_password("other", "pepper"));
        assert_ne!(hash_password("secret", "pepper"), hash_password("secret", "salt"));
    }

    #[test]
    fn test_clear_password_never_stored() {
        let hashed = hash_password("hunter2", "pepper");
        assert!(!hashed.contains("hunter2"));
    }
}
