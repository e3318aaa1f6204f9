//! End-to-end tests: listing source in, sorted recommendations out.
mod common;
use common::*;
use restaurant_recs::prelude::*;

#[test]
fn test_recommend_from_reader() {
    let result = recommend("$", &["Chinese", "Thai"], SAMPLE_LISTING.as_bytes()).unwrap();
    assert_eq!(
        result,
        vec![rated(71, "Dumplings R Us"), rated(82, "Queen St. Cafe")]
    );
}

#[test]
fn test_recommend_top_tier_is_empty() {
    let none: Vec<String> = Vec::new();
    let result = recommend("$$$$", &none, SAMPLE_LISTING.as_bytes()).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_recommend_propagates_load_errors() {
    let err = recommend("$", &["Thai"], "A\n10\n$\n".as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        Error::Load(LoadError::TruncatedListing { .. })
    ));
}

#[test]
fn test_recommend_unknown_tier_is_query_error() {
    let err = recommend("$$$$$", &["Thai"], SAMPLE_LISTING.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::Query(QueryError::UnknownPriceTier(_))));
}

#[test]
fn test_recommender_rereads_listing_per_query() {
    let file = write_listing(SAMPLE_LISTING);
    let recommender = Recommender::builder(file.path()).build();

    let first = recommender.recommend("$$", &["Mexican"]).unwrap();
    assert_eq!(first, vec![rated(85, "Mexican Grill")]);

    std::fs::write(file.path(), "Mexican Grill\n40\n$$\nMexican\n\n").unwrap();
    let second = recommender.recommend("$$", &["Mexican"]).unwrap();
    assert_eq!(second, vec![rated(40, "Mexican Grill")]);
}

#[test]
fn test_recommender_builder_options() {
    let file = write_listing(SAMPLE_LISTING);
    let recommender = Recommender::builder(file.path())
        .order(SortOrder::Descending)
        .duplicates(DuplicatePolicy::Collapse)
        .strict_price(false)
        .build();

    let result = recommender
        .recommend("$", &["Malaysian", "Thai", "Chinese", "Pub Food"])
        .unwrap();
    assert_eq!(
        result,
        vec![
            rated(82, "Queen St. Cafe"),
            rated(71, "Dumplings R Us"),
            rated(52, "Deep Fried Everything"),
        ]
    );
    assert!(recommender.recommend("??", &["Thai"]).unwrap().is_empty());
}

#[test]
fn test_builder_path_wins_over_config_path() {
    let file = write_listing(SAMPLE_LISTING);
    let config = RecommendConfig {
        listing_path: "elsewhere.txt".into(),
        order: SortOrder::Descending,
        ..RecommendConfig::default()
    };
    let recommender = Recommender::builder(file.path())
        .with_config(config)
        .build();

    assert_eq!(recommender.listing_path(), file.path());
    assert_eq!(recommender.config().listing_path, file.path());
    assert_eq!(recommender.config().order, SortOrder::Descending);

    let result = recommender.recommend("$", &["Chinese", "Thai"]).unwrap();
    assert_eq!(
        result,
        vec![rated(82, "Queen St. Cafe"), rated(71, "Dumplings R Us")]
    );
}

#[test]
fn test_duplicate_names_in_results() {
    let file = write_listing(DUPLICATE_NAME_LISTING);
    let recommender = Recommender::builder(file.path()).build();

    // Listed at $ with rating 60, but the later record's 90 wins.
    let result = recommender.recommend("$", &["Chinese"]).unwrap();
    assert_eq!(result, vec![rated(90, "Noodle House")]);

    let result = recommender.recommend("$$", &["Chinese", "Thai"]).unwrap();
    assert_eq!(
        result,
        vec![rated(90, "Noodle House"), rated(90, "Noodle House")]
    );
}

#[test]
fn test_recommender_from_config_file() {
    let listing = write_listing(SAMPLE_LISTING);
    let config_json = serde_json::json!({
        "listing_path": listing.path(),
        "order": "descending"
    })
    .to_string();
    let config_file = write_listing(&config_json);

    let config = RecommendConfig::from_file(config_file.path()).unwrap();
    assert!(config.strict_price);
    assert_eq!(config.duplicates, DuplicatePolicy::Keep);

    let recommender = Recommender::from_config(config);
    let result = recommender.recommend("$", &["Chinese", "Thai"]).unwrap();
    assert_eq!(
        result,
        vec![rated(82, "Queen St. Cafe"), rated(71, "Dumplings R Us")]
    );
}

#[test]
fn test_missing_listing_file() {
    let recommender = Recommender::builder("no/such/listing.txt").build();
    let err = recommender.recommend("$", &["Thai"]).unwrap_err();
    assert!(matches!(err, Error::Load(LoadError::Io { .. })));
}
