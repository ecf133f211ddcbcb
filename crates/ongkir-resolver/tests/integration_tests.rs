//! Integration tests for ongkir-resolver
//!
//! These tests exercise the public resolver API against the bundled area table.

use ongkir_domain::{Confidence, DetectionMethod, FeeResolver, TierId};
use ongkir_resolver::table::{OUT_OF_RANGE_KEYWORDS, TIERS};
use ongkir_resolver::{DeliveryFeeResolver, FeeSource, ResolverConfig, ResolverError};

fn resolver() -> DeliveryFeeResolver {
    DeliveryFeeResolver::default_config()
}

#[test]
fn test_every_keyword_resolves_to_its_tier() {
    let resolver = resolver();
    let mut checked = 0;

    for (idx, tier) in TIERS.iter().enumerate() {
        for keyword in tier.keywords {
            let address = format!("jl. {} rt 01", keyword);

            let out_of_range = OUT_OF_RANGE_KEYWORDS.iter().any(|k| address.contains(k));
            let nearer = TIERS[..idx]
                .iter()
                .flat_map(|t| t.keywords.iter())
                .any(|k| address.contains(k));
            if out_of_range || nearer {
                continue;
            }

            let result = resolver.resolve_from_address(&address);
            assert_eq!(result.tier, tier.id, "keyword '{}' resolved to {}", keyword, result.tier);
            assert_eq!(result.fee, tier.fee);
            assert_eq!(result.confidence, Confidence::High);
            assert_eq!(result.detection_method, DetectionMethod::ExactKeywordMatch);
            assert!(!result.requires_confirmation);
            checked += 1;
        }
    }

    assert!(checked > 100, "only {} keywords checked", checked);
}

#[test]
fn test_nearest_tier_wins() {
    let result = resolver().resolve_from_address("Perum Griya, Wonosobo dekat Kalibening");
    assert_eq!(result.tier, TierId::Tier1);
    assert_eq!(result.matched_keyword.as_deref(), Some("kalibening"));

    let result = resolver().resolve_from_address("Purwokerto - Kebumen - Batur");
    assert_eq!(result.tier, TierId::Tier2);
}

#[test]
fn test_out_of_range_precedence() {
    for address in [
        "Desa Karangjati, Jakarta Selatan",
        "Jl. Sigaluh 4, Kota Bandung",
        "Karanganyar Kalibening",
    ] {
        let result = resolver().resolve_from_address(address);
        assert_eq!(result.tier, TierId::OutOfRange, "{}", address);
        assert_eq!(result.fee, 35_000);
        assert!(result.requires_confirmation);
    }
}

#[test]
fn test_multiline_address() {
    let address = "Bpk. Slamet\nDs. Rejasa RT 02/RW 01\nKec. Susukan\nKab. Banjarnegara";
    let result = resolver().resolve_from_address(address);
    assert_eq!(result.tier, TierId::Free);
    assert_eq!(result.fee, 0);
}

#[test]
fn test_sentinel_fees_are_highest() {
    let config = ResolverConfig::default();
    let max_tier_fee = TIERS.iter().map(|t| t.fee).max().unwrap();
    assert!(config.unknown_fee > max_tier_fee);
    assert!(config.out_of_range_fee > config.unknown_fee);
}

#[test]
fn test_confirmation_tracks_confidence_for_addresses() {
    let resolver = resolver();
    for address in [
        "Jl. Mawar No. 5",
        "kota semarang",
        "desa sigaluh",
        "dusun karang",
        "",
        "   ",
        "123 456",
    ] {
        let result = resolver.resolve_from_address(address);
        let expected = result.confidence == Confidence::None || result.tier.is_sentinel();
        assert_eq!(result.requires_confirmation, expected, "{:?}", address);
    }
}

#[test]
fn test_distance_tiers_echo_distance() {
    let resolver = resolver();
    for tier in &TIERS {
        let range = tier.distance_range;
        for km in [range.min_km + 0.01, (range.min_km + range.max_km) / 2.0, range.max_km] {
            let result = resolver.resolve_from_distance(km);
            assert_eq!(result.tier, tier.id, "{} km", km);
            assert_eq!(result.confidence, Confidence::High);
            assert_eq!(result.distance, Some(km));
            assert!(!result.requires_confirmation);
        }
    }
}

#[test]
fn test_invalid_and_far_distances() {
    let resolver = resolver();

    let invalid = resolver.resolve_from_distance(-1.0);
    assert_eq!(invalid.detection_method, DetectionMethod::ManualDistanceInvalid);
    let invalid = resolver.resolve_from_distance(f64::NAN);
    assert_eq!(invalid.detection_method, DetectionMethod::ManualDistanceInvalid);

    let far = resolver.resolve_from_distance(999.0);
    assert_eq!(far.tier, TierId::Unknown);
    assert_eq!(far.detection_method, DetectionMethod::ManualDistanceUnknown);
    assert!(far.requires_confirmation);
}

#[test]
fn test_suggestions_case_insensitive() {
    let resolver = resolver();
    let lower = resolver.suggestions("su");
    let upper = resolver.suggestions("SU");
    assert_eq!(lower, upper);
    assert_eq!(lower.len(), 10);
    assert!(resolver.suggestions("a").is_empty());
}

#[test]
fn test_suggestion_limit_is_configurable() {
    let config = ResolverConfig {
        suggestion_limit: 3,
        ..ResolverConfig::default()
    };
    let resolver = DeliveryFeeResolver::new(config).unwrap();
    assert_eq!(resolver.suggestions("kec").len(), 3);
}

#[test]
fn test_list_areas_shape() {
    let areas = resolver().list_areas();
    assert_eq!(areas.len(), TIERS.len() + 1);
    assert_eq!(
        areas.iter().filter(|a| a.tier == TierId::OutOfRange).count(),
        1
    );
    assert_eq!(areas.last().map(|a| a.tier), Some(TierId::OutOfRange));
    assert!(areas.iter().all(|a| a.example_areas.len() <= 5));
}

#[test]
fn test_trait_object_usage() {
    let resolver: Box<dyn FeeResolver + Send + Sync> = Box::new(resolver());
    assert_eq!(resolver.resolve_from_address("dieng").tier, TierId::Tier3);
    assert_eq!(resolver.resolve_from_distance(30.0).tier, TierId::Tier4);
}

#[test]
fn test_checkout_settlement_with_config_tolerance() {
    let resolver = resolver();

    let settled = resolver.settle_checkout_fee("Desa Wanayasa", Some(5_500)).unwrap();
    assert_eq!(settled.fee, 5_500);
    assert_eq!(settled.source, FeeSource::Client);

    let settled = resolver.settle_checkout_fee("Desa Wanayasa", None).unwrap();
    assert_eq!(settled.fee, 5_000);
    assert_eq!(settled.source, FeeSource::Computed);

    let err = resolver.settle_checkout_fee("Desa Wanayasa", Some(0)).unwrap_err();
    assert!(matches!(err, ResolverError::FeeMismatch { expected_fee: 5_000, .. }));
}

#[test]
fn test_checkout_unknown_address_needs_confirmation() {
    let settled = resolver().settle_checkout_fee("Jl. Mawar No. 5", None).unwrap();
    assert_eq!(settled.fee, 30_000);
    assert!(settled.requires_confirmation());
}

#[test]
fn test_resolver_is_shareable_across_threads() {
    let resolver = std::sync::Arc::new(resolver());
    let handles: Vec<_> = ["susukan", "sigaluh", "kebumen", "purwokerto"]
        .into_iter()
        .map(|address| {
            let resolver = std::sync::Arc::clone(&resolver);
            std::thread::spawn(move || resolver.resolve_from_address(address).tier)
        })
        .collect();

    let tiers: Vec<TierId> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(tiers, vec![TierId::Free, TierId::Tier2, TierId::Tier5, TierId::Tier6]);
}
