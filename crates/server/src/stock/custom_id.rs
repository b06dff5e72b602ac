//! Custom ID generation for medicine units.

/// Longest product-name prefix carried into a custom ID.
const NAME_PREFIX_LEN: usize = 10;

/// Prefix used when a product name sanitizes down to nothing.
const FALLBACK_PREFIX: &str = "Medicine";

/// Derives the display identifier for the unit at a given position.
///
/// The product name is stripped to ASCII alphanumerics, truncated to ten
/// characters, and suffixed with the zero-padded 1-based ordinal:
/// `"Amoxicillin 250mg"` at position 1 becomes `"Amoxicilli-001"`.
///
/// Regeneration is keyed purely by position. Two products whose names share
/// a sanitized prefix can collide across unit sets; uniqueness only holds
/// within one product's units at generation time.
#[must_use]
pub fn custom_unit_id(product_name: &str, ordinal: usize) -> String {
    let sanitized: String = product_name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(NAME_PREFIX_LEN)
        .collect();

    let prefix = if sanitized.is_empty() {
        FALLBACK_PREFIX
    } else {
        &sanitized
    };

    format!("{prefix}-{ordinal:03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_and_truncates_name() {
        assert_eq!(custom_unit_id("Amoxicillin 250mg", 1), "Amoxicilli-001");
        assert_eq!(custom_unit_id("Amoxicillin 250mg", 2), "Amoxicilli-002");
    }

    #[test]
    fn test_short_name_kept_whole() {
        assert_eq!(custom_unit_id("Ivermectin", 3), "Ivermectin-003");
        assert_eq!(custom_unit_id("B12", 1), "B12-001");
    }

    #[test]
    fn test_non_alphanumerics_removed() {
        assert_eq!(custom_unit_id("Pen-G (5%)", 1), "PenG5-001");
    }

    #[test]
    fn test_empty_name_falls_back() {
        assert_eq!(custom_unit_id("", 1), "Medicine-001");
        assert_eq!(custom_unit_id("!!! ---", 2), "Medicine-002");
    }

    #[test]
    fn test_ordinal_padding() {
        assert_eq!(custom_unit_id("Dexa", 9), "Dexa-009");
        assert_eq!(custom_unit_id("Dexa", 10), "Dexa-010");
        assert_eq!(custom_unit_id("Dexa", 123), "Dexa-123");
        // Padding grows past three digits rather than wrapping.
        assert_eq!(custom_unit_id("Dexa", 1000), "Dexa-1000");
    }
}
