//! Address matching strategies
//!
//! Each strategy is a pure function over a normalized (lowercased, trimmed)
//! address returning the first keyword hit, scanning tiers nearest first and
//! keywords in listed order.

use crate::table::TierDefinition;
use regex::Regex;
use std::sync::LazyLock;

/// Shortest keyword or address token that may take part in a partial match
const MIN_TOKEN_CHARS: usize = 3;

/// A keyword hit in a specific tier
#[derive(Debug, Clone, Copy)]
pub(crate) struct KeywordMatch {
    pub tier: &'static TierDefinition,
    pub keyword: &'static str,
}

/// Administrative-structure patterns, tried in order.
///
/// Capture group 1 is the place name following a village, district or
/// regency prefix, or preceding a known regency name.
static ADDRESS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(?:desa|ds\.?|kelurahan)\s+([0-9A-Za-z_]+)",
        r"(?i)(?:kecamatan|kec\.?)\s+([0-9A-Za-z_]+)",
        r"(?i)(?:kabupaten|kab\.?)\s+([0-9A-Za-z_]+)",
        r"(?i)([0-9A-Za-z_]+),?\s*(?:banjarnegara|purbalingga|wonosobo)",
    ]
    .into_iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
});

/// Lowercase and trim a raw address
pub(crate) fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Split on runs of whitespace, commas, periods and hyphens
pub(crate) fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || matches!(c, ',' | '.' | '-'))
        .filter(|token| !token.is_empty())
}

/// First out-of-range keyword contained in the address
pub(crate) fn find_out_of_range(address: &str, keywords: &[&'static str]) -> Option<&'static str> {
    keywords.iter().copied().find(|keyword| address.contains(keyword))
}

/// First keyword that is a substring of the address
pub(crate) fn find_exact(address: &str, tiers: &'static [TierDefinition]) -> Option<KeywordMatch> {
    tiers.iter().find_map(|tier| {
        tier.keywords
            .iter()
            .find(|keyword| address.contains(*keyword))
            .map(|keyword| KeywordMatch { tier, keyword: *keyword })
    })
}

/// First keyword sharing an overlapping word token with the address
///
/// Two tokens overlap when either contains the other. Both tokens must be at
/// least three characters, so fragments like "di", "ke" or "no" never match.
pub(crate) fn find_partial(address: &str, tiers: &'static [TierDefinition]) -> Option<KeywordMatch> {
    let address_tokens: Vec<&str> = tokenize(address)
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .collect();

    if address_tokens.is_empty() {
        return None;
    }

    tiers.iter().find_map(|tier| {
        tier.keywords
            .iter()
            .find(|keyword| {
                tokenize(keyword)
                    .filter(|kw| kw.chars().count() >= MIN_TOKEN_CHARS)
                    .any(|kw| {
                        address_tokens
                            .iter()
                            .any(|aw| aw.contains(kw) || kw.contains(aw))
                    })
            })
            .map(|keyword| KeywordMatch { tier, keyword: *keyword })
    })
}

/// Place name captured by the first administrative pattern that matches
/// the address and whose capture resolves to a keyword
pub(crate) fn find_by_pattern(address: &str, tiers: &'static [TierDefinition]) -> Option<KeywordMatch> {
    ADDRESS_PATTERNS.iter().find_map(|pattern| {
        let captured = pattern.captures(address)?.get(1)?.as_str().to_lowercase();
        find_exact(&captured, tiers)
    })
}

/// Place names the administrative patterns would extract, in pattern order
pub(crate) fn extract_place_names(address: &str) -> Vec<String> {
    ADDRESS_PATTERNS
        .iter()
        .filter_map(|pattern| pattern.captures(address))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{OUT_OF_RANGE_KEYWORDS, TIERS};
    use ongkir_domain::TierId;

    #[test]
    fn test_all_address_patterns_compile() {
        assert_eq!(ADDRESS_PATTERNS.len(), 4);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Desa SUSUKAN \n"), "desa susukan");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_tokenize_collapses_separators() {
        let tokens: Vec<&str> = tokenize("jl. mawar, no-5  rt 01").collect();
        assert_eq!(tokens, vec!["jl", "mawar", "no", "5", "rt", "01"]);
        assert_eq!(tokenize(" .,- ").count(), 0);
    }

    #[test]
    fn test_out_of_range_hit() {
        assert_eq!(find_out_of_range("jl. sudirman, jakarta", OUT_OF_RANGE_KEYWORDS), Some("jakarta"));
        assert_eq!(find_out_of_range("desa rakit", OUT_OF_RANGE_KEYWORDS), None);
    }

    #[test]
    fn test_exact_prefers_nearest_tier() {
        // "rakit" is tier3, "wonosobo" tier4
        let hit = find_exact("rakit, wonosobo", &TIERS).unwrap();
        assert_eq!(hit.tier.id, TierId::Tier3);
        assert_eq!(hit.keyword, "rakit");
    }

    #[test]
    fn test_exact_keyword_order_within_tier() {
        let hit = find_exact("kec susukan", &TIERS).unwrap();
        assert_eq!(hit.tier.id, TierId::Free);
        assert_eq!(hit.keyword, "susukan");
    }

    #[test]
    fn test_partial_token_overlap() {
        let hit = find_partial("dusun sigal rt 2", &TIERS).unwrap();
        assert_eq!(hit.tier.id, TierId::Tier2);
        assert_eq!(hit.keyword, "sigaluh");
    }

    #[test]
    fn test_partial_ignores_short_tokens() {
        assert!(find_partial("jl. mawar no. 5", &TIERS).is_none());
        assert!(find_partial("", &TIERS).is_none());
        assert!(find_partial("di ke", &TIERS).is_none());
        // "ka" is inside "karangjati" but too short to count
        assert!(find_partial("gg ka 5", &TIERS).is_none());
    }

    #[test]
    fn test_partial_generic_prefix_words_match() {
        // "desa" is itself a keyword token of the nearest tier
        let hit = find_partial("desa mawar", &TIERS).unwrap();
        assert_eq!(hit.tier.id, TierId::Free);
        assert_eq!(hit.keyword, "desa susukan");
    }

    #[test]
    fn test_pattern_extracts_after_prefix() {
        let hit = find_by_pattern("ds. rejasa rt 3", &TIERS).unwrap();
        assert_eq!(hit.tier.id, TierId::Free);
        assert_eq!(hit.keyword, "rejasa");

        let hit = find_by_pattern("kec. madukara", &TIERS).unwrap();
        assert_eq!(hit.tier.id, TierId::Tier3);
    }

    #[test]
    fn test_pattern_without_prefix() {
        assert!(find_by_pattern("jl. mawar no. 5", &TIERS).is_none());
    }

    #[test]
    fn test_extract_place_names_in_pattern_order() {
        let names = extract_place_names("desa mawar, kec. melati, kab. anggrek");
        assert_eq!(names, vec!["mawar", "melati", "anggrek"]);

        let names = extract_place_names("kutabanjarnegara");
        assert_eq!(names, vec!["kuta"]);
    }
}
