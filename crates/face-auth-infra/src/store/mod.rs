//! User store implementations.

mod memory;
mod rest;

#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
mod postgres;

pub use memory::InMemoryUserStore;
pub use rest::{RestStoreConfig, RestUserStore};

#[cfg(feature = "postgres")]
pub use postgres::{PostgresStoreConfig, PostgresUserStore};

/// Mask an email for logging to avoid PII in logs: `alice@x.com` -> `a***@x.com`.
pub fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) => {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = match local.chars().next() {
                Some(first) if local.chars().count() > 1 => format!("{first}***"),
                _ => "***".to_string(),
            };
            format!("{masked_local}{domain}")
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::mask_email;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("alice@example.com"), "a***@example.com");
        assert_eq!(mask_email("a@example.com"), "***@example.com");
        assert_eq!(mask_email("élodie@example.com"), "é***@example.com");
        assert_eq!(mask_email("no-at-sign"), "***");
    }
}
