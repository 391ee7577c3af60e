use super::*;
use crate::product::{EcoFlags, Flag, Product};

fn product(name: &str, category: &str, price: f64, flags: (Flag, Flag, Flag)) -> Product {
    Product::new(name, category, price, EcoFlags::new(flags.0, flags.1, flags.2)).unwrap()
}

fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        product(
            "Bamboo Toothbrush",
            "Personal Care",
            50.0,
            (Flag::Yes, Flag::Yes, Flag::No),
        ),
        product(
            "Bamboo Comb",
            "Personal Care",
            40.0,
            (Flag::Yes, Flag::No, Flag::No),
        ),
        product(
            "Plastic Bottle",
            "Kitchen",
            20.0,
            (Flag::No, Flag::No, Flag::No),
        ),
    ])
}

fn names(recs: &Recommendations) -> Vec<&str> {
    recs.items.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn test_recommend_worked_example() {
    let recs = recommend(
        &sample_catalog(),
        "Bamboo Toothbrush",
        2,
        &RecommendOptions::default(),
    );

    assert_eq!(recs.status, RecommendStatus::Ok);
    assert_eq!(
        recs.items,
        vec![
            Recommendation {
                name: "Bamboo Comb".into(),
                sustainability_score: 1,
                price: 40.0,
            },
            Recommendation {
                name: "Plastic Bottle".into(),
                sustainability_score: 0,
                price: 20.0,
            },
        ]
    );
}

#[test]
fn test_recommend_never_returns_query() {
    let catalog = sample_catalog();
    for query in ["Bamboo Toothbrush", "Bamboo Comb", "Plastic Bottle"] {
        let recs = recommend(&catalog, query, 10, &RecommendOptions::default());
        assert_eq!(recs.items.len(), 2);
        assert!(!names(&recs).contains(&query));
    }
}

#[test]
fn test_recommend_top_n_larger_than_candidates() {
    let recs = recommend(
        &sample_catalog(),
        "Plastic Bottle",
        DEFAULT_TOP_N + 5,
        &RecommendOptions::default(),
    );
    assert_eq!(recs.items.len(), 2);
}

#[test]
fn test_recommend_ties_keep_catalog_order() {
    // Bottle shares nothing with any of the others: all score 0
    let catalog = Catalog::new(vec![
        product("Steel Bottle", "Drinkware", 10.0, (Flag::No, Flag::No, Flag::No)),
        product("Jute Bag", "Bags", 5.0, (Flag::No, Flag::No, Flag::No)),
        product("Cork Mat", "Yoga", 30.0, (Flag::No, Flag::No, Flag::No)),
        product("Wool Socks", "Clothing", 8.0, (Flag::No, Flag::No, Flag::No)),
    ]);

    let recs = recommend(&catalog, "Steel Bottle", 3, &RecommendOptions::default());
    assert_eq!(names(&recs), vec!["Jute Bag", "Cork Mat", "Wool Socks"]);
}

#[test]
fn test_recommend_unknown_product() {
    let recs = recommend(
        &sample_catalog(),
        "bamboo toothbrush",
        3,
        &RecommendOptions::default(),
    );
    assert!(recs.is_empty());
    assert_eq!(recs.status, RecommendStatus::UnknownProduct);
}

#[test]
fn test_recommend_empty_catalog() {
    let recs = recommend(&Catalog::default(), "Anything", 3, &RecommendOptions::default());
    assert!(recs.is_empty());
    assert_eq!(recs.status, RecommendStatus::EmptyCatalog);
}

#[test]
fn test_recommend_zero_limit() {
    let recs = recommend(&sample_catalog(), "Bamboo Comb", 0, &RecommendOptions::default());
    assert!(recs.is_empty());
    assert_eq!(recs.status, RecommendStatus::ZeroLimit);
}

#[test]
fn test_recommend_empty_vocabulary() {
    let catalog = Catalog::new(vec![
        product("The", "And", 1.0, (Flag::No, Flag::No, Flag::No)),
        product("A", "", 2.0, (Flag::No, Flag::No, Flag::No)),
    ]);

    let recs = recommend(&catalog, "The", 3, &RecommendOptions::default());
    assert!(recs.is_empty());
    assert_eq!(
        recs.status,
        RecommendStatus::DegenerateInput(DegenerateInput::EmptyVocabulary)
    );
}

#[test]
fn test_recommend_zero_magnitude_query() {
    // Query document is all stop words; every candidate scores 0 so order is catalog order
    let catalog = Catalog::new(vec![
        product("Bamboo Comb", "Personal Care", 40.0, (Flag::Yes, Flag::No, Flag::No)),
        product("The", "", 1.0, (Flag::No, Flag::No, Flag::No)),
        product("Jute Bag", "Bags", 5.0, (Flag::No, Flag::No, Flag::No)),
    ]);

    let recs = recommend(&catalog, "The", 3, &RecommendOptions::default());
    assert_eq!(recs.status, RecommendStatus::Ok);
    assert_eq!(names(&recs), vec!["Bamboo Comb", "Jute Bag"]);
}

#[test]
fn test_recommend_duplicate_name_uses_first() {
    let catalog = Catalog::new(vec![
        product("Tote", "Bags", 10.0, (Flag::No, Flag::No, Flag::No)),
        product("Canvas Tote", "Bags", 12.0, (Flag::No, Flag::No, Flag::No)),
        product("Tote", "Kitchen Towels", 3.0, (Flag::No, Flag::No, Flag::No)),
        product("Kitchen Towels", "Kitchen", 4.0, (Flag::No, Flag::No, Flag::No)),
    ]);

    let recs = recommend(&catalog, "Tote", 1, &RecommendOptions::default());
    assert_eq!(names(&recs), vec!["Canvas Tote"]);
}

#[test]
fn test_recommend_stemming_changes_matches() {
    let catalog = Catalog::new(vec![
        product("Grocery Bags", "Storage", 10.0, (Flag::No, Flag::No, Flag::No)),
        product("Mesh Bag", "Produce", 4.0, (Flag::No, Flag::No, Flag::No)),
        product("Glass Jar", "Pantry", 6.0, (Flag::No, Flag::No, Flag::No)),
    ]);

    let plain = recommend(&catalog, "Glass Jar", 2, &RecommendOptions::default());
    assert_eq!(names(&plain), vec!["Grocery Bags", "Mesh Bag"]);

    let matrix_plain = similarity_for(&catalog, false);
    let matrix_stemmed = similarity_for(&catalog, true);
    assert_eq!(matrix_plain.get(0, 1), Some(0.0));
    assert!(matrix_stemmed.get(0, 1).unwrap() > 0.0);
}

fn similarity_for(catalog: &Catalog, stemming: bool) -> SimilarityMatrix {
    let docs = build_feature_documents(catalog);
    let tfidf = Vectorizer::new(stemming).fit_transform(&docs).unwrap();
    SimilarityMatrix::from_tfidf(&tfidf)
}

#[test]
fn test_similarity_matrix_symmetric_with_unit_diagonal() {
    let matrix = similarity_for(&sample_catalog(), false);
    assert_eq!(matrix.size(), 3);
    for i in 0..3 {
        assert!((matrix.get(i, i).unwrap() - 1.0).abs() < 1e-9);
        for j in 0..3 {
            let score = matrix.get(i, j).unwrap();
            assert_eq!(score, matrix.get(j, i).unwrap());
            assert!((0.0..=1.0 + 1e-9).contains(&score));
        }
    }
    assert_eq!(matrix.get(3, 0), None);
}

#[test]
fn test_recommend_is_deterministic() {
    let catalog = sample_catalog();
    let first = recommend(&catalog, "Bamboo Comb", 2, &RecommendOptions::default());
    let second = recommend(&catalog, "Bamboo Comb", 2, &RecommendOptions::default());
    assert_eq!(first, second);
}

#[test]
fn test_find_near_duplicates() {
    let catalog = Catalog::new(vec![
        product("Bamboo Comb", "Personal Care", 40.0, (Flag::Yes, Flag::No, Flag::No)),
        product("Plastic Bottle", "Kitchen", 20.0, (Flag::No, Flag::No, Flag::No)),
        product("Bamboo Comb", "Personal Care", 35.0, (Flag::Yes, Flag::Yes, Flag::No)),
    ]);

    let pairs = find_near_duplicates(&catalog, 0.9, &RecommendOptions::default());
    assert_eq!(pairs.len(), 1);
    assert_eq!((pairs[0].first, pairs[0].second), (0, 2));
    assert!(pairs[0].similarity > 0.99);
}

#[test]
fn test_find_near_duplicates_degenerate_catalog() {
    assert!(find_near_duplicates(&Catalog::default(), 0.5, &RecommendOptions::default()).is_empty());
}
