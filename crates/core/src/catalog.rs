//! Catalog constants and validation for customers and products.

/// Product names seeded once at store initialization (idempotent, keyed
/// by the unique `name` column).
pub const DEFAULT_PRODUCT_NAMES: &[&str] = &[
    "Raw Lumber",
    "Dried Lumber",
    "Planed Boards",
    "Laths",
    "Beams",
    "Pellets",
];

/// Suggested values for the optional product `type` field. Not enforced.
pub const PRODUCT_TYPES: &[&str] = DEFAULT_PRODUCT_NAMES;

/// Validate a customer or product name: must be non-empty after trimming.
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        Err("Name must not be empty".to_string())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_name_accepted() {
        assert!(validate_name("Beams").is_ok());
    }

    #[test]
    fn empty_and_whitespace_names_rejected() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn seed_list_has_six_unique_names() {
        let mut names = DEFAULT_PRODUCT_NAMES.to_vec();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 6);
    }
}
