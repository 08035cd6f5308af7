//! Slug generation for outbox file names.
//!
//! ## Summary
//! Generates stable, filesystem-safe slugs from event summaries. Slugs are lowercase,
//! alphanumeric with hyphens.

/// Slug used when a name contains no alphanumeric characters at all.
pub const FALLBACK_SLUG: &str = "event";

/// Generate a filesystem-safe slug from a name.
///
/// Converts to lowercase, replaces spaces and special characters with hyphens,
/// collapses multiple hyphens, and trims edge hyphens.
///
/// Examples:
/// - "Thesis Draft" -> "thesis-draft"
/// - "Read Knuth's TAOCP" -> "read-knuth-s-taocp"
/// - "Taxes & Forms" -> "taxes-forms"
#[must_use]
pub fn generate_slug(name: &str) -> String {
    let slug = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name() {
        assert_eq!(generate_slug("thesis"), "thesis");
    }

    #[test]
    fn test_with_spaces() {
        assert_eq!(generate_slug("Thesis Draft"), "thesis-draft");
    }

    #[test]
    fn test_with_special_chars() {
        assert_eq!(generate_slug("Read Knuth's TAOCP"), "read-knuth-s-taocp");
    }

    #[test]
    fn test_leading_trailing() {
        assert_eq!(generate_slug("  essay  "), "essay");
    }

    #[test]
    fn test_complex() {
        assert_eq!(generate_slug("Taxes & Forms @ Home"), "taxes-forms-home");
    }

    #[test]
    fn test_no_alphanumerics() {
        assert_eq!(generate_slug("!!! ???"), FALLBACK_SLUG);
    }
}
