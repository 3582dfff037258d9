//! Integration tests for the full recommendation flow.
//!
//! These drive the app the way a front end would: sign up, build a
//! collection, leave reviews, then ask for recommendations and poke at
//! the filter surface.

use app::{AddOutcome, App, AppError, Recommendations};
use engine::{Jitter, RatingFilter, DISPLAY_LIMIT, REASON_LIMIT};
use std::collections::BTreeMap;
use std::sync::Arc;
use store::{Catalog, CatalogEntry, MemoryStore};

fn test_catalog() -> Arc<Catalog> {
    let movies: [(&str, u32, &str); 10] = [
        ("Titanic", 194, "PG-13"),
        ("Gattaca", 107, "PG-13"),
        ("Men in Black", 98, "PG-13"),
        ("The Game", 129, "R"),
        ("LA Confidential", 138, "R"),
        ("Boogie Nights", 156, "R"),
        ("Anastasia", 94, "G"),
        ("The Little Mermaid", 83, "G"),
        ("Flubber", 93, "PG"),
        ("George of the Jungle", 92, "PG"),
    ];
    let mut entries = BTreeMap::new();
    for (title, runtime, rating) in movies {
        entries.insert(
            title.to_string(),
            CatalogEntry {
                runtime: Some(runtime),
                rating: Some(rating.to_string()),
            },
        );
    }
    Arc::new(Catalog::from_entries(entries))
}

fn app_with_user(username: &str) -> App<MemoryStore> {
    let app = App::new(test_catalog(), MemoryStore::new()).with_jitter(Jitter::Seeded(42));
    app.signup(username, "hunter22").unwrap();
    app.login(username, "hunter22").unwrap();
    app
}

fn ranked(app: &App<MemoryStore>, filter: &RatingFilter) -> Vec<engine::RecommendationCard> {
    match app.recommendations(filter).unwrap() {
        Recommendations::Ranked(cards) => cards,
        Recommendations::EmptyCollection => panic!("expected ranked recommendations"),
    }
}

#[test]
fn recommendations_require_login() {
    let app = App::new(test_catalog(), MemoryStore::new());
    assert!(matches!(
        app.recommendations(&RatingFilter::All),
        Err(AppError::AuthRequired)
    ));
}

#[test]
fn empty_collection_is_a_distinct_state() {
    let app = app_with_user("ada");
    assert_eq!(
        app.recommendations(&RatingFilter::All).unwrap(),
        Recommendations::EmptyCollection
    );
}

#[test]
fn owned_movies_never_appear_in_recommendations() {
    let app = app_with_user("ada");
    app.add_to_collection("Titanic").unwrap();
    app.add_to_collection("Gattaca").unwrap();

    let cards = ranked(&app, &RatingFilter::All);
    assert!(!cards.is_empty());
    for card in &cards {
        assert_ne!(card.title, "Titanic");
        assert_ne!(card.title, "Gattaca");
    }
}

#[test]
fn recommendations_are_shaped_for_display() {
    let app = app_with_user("ada");
    app.add_to_collection("Titanic").unwrap();

    let cards = ranked(&app, &RatingFilter::All);
    assert!(cards.len() <= DISPLAY_LIMIT);
    for card in &cards {
        assert!(card.match_percent <= 100);
        assert!(card.reasons.len() <= REASON_LIMIT);
        assert_eq!(card.poster_path, format!("images/{}.png", card.title));
    }
}

#[test]
fn class_filter_returns_ordered_subset_of_all() {
    let app = app_with_user("ada");
    app.add_to_collection("Titanic").unwrap();
    app.add_to_collection("The Game").unwrap();

    let all = ranked(&app, &RatingFilter::All);
    let only_r = ranked(&app, &RatingFilter::parse("R"));

    for card in &only_r {
        assert_eq!(card.rating.as_deref(), Some("R"));
    }

    // Same jitter seed, so the filtered list must be the R-rated rows of
    // the unfiltered list in the same relative order.
    let r_titles_in_all: Vec<&str> = all
        .iter()
        .filter(|c| c.rating.as_deref() == Some("R"))
        .map(|c| c.title.as_str())
        .collect();
    let r_titles: Vec<&str> = only_r.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(r_titles, r_titles_in_all);
}

#[test]
fn adding_twice_keeps_one_entry() {
    let app = app_with_user("ada");
    assert_eq!(app.add_to_collection("Titanic").unwrap(), AddOutcome::Added);
    assert_eq!(
        app.add_to_collection("Titanic").unwrap(),
        AddOutcome::AlreadyInCollection
    );
    assert_eq!(app.collection().unwrap().len(), 1);
}

#[test]
fn fixed_seed_gives_identical_runs() {
    let build = || {
        let app = app_with_user("ada");
        app.add_to_collection("Titanic").unwrap();
        app.add_to_collection("The Game").unwrap();
        ranked(&app, &RatingFilter::All)
    };

    let first = build();
    let second = build();
    assert_eq!(first, second);
}

#[test]
fn adding_a_recommended_movie_removes_it_from_the_next_run() {
    let app = app_with_user("ada");
    app.add_to_collection("Titanic").unwrap();

    let before = ranked(&app, &RatingFilter::All);
    let picked = before[0].title.clone();

    app.add_to_collection(&picked).unwrap();
    let after = ranked(&app, &RatingFilter::All);
    assert!(after.iter().all(|card| card.title != picked));
}

#[test]
fn collaborative_signal_flows_between_users() {
    // ada and bob both own and highly rate Titanic; bob also loves
    // The Game. The shared taste should surface in ada's reasons for
    // The Game.
    let catalog = test_catalog();
    let store = MemoryStore::new();
    let app = App::new(catalog, store).with_jitter(Jitter::Seeded(7));

    app.signup("bob", "hunter22").unwrap();
    app.login("bob", "hunter22").unwrap();
    app.add_to_collection("Titanic").unwrap();
    app.add_to_collection("The Game").unwrap();
    app.add_review("Titanic", 5, "").unwrap();
    app.add_review("The Game", 5, "").unwrap();

    app.signup("ada", "hunter22").unwrap();
    app.login("ada", "hunter22").unwrap();
    app.add_to_collection("Titanic").unwrap();
    app.add_review("Titanic", 5, "").unwrap();

    let cards = ranked(&app, &RatingFilter::All);
    let the_game = cards
        .iter()
        .find(|card| card.title == "The Game")
        .expect("The Game should be recommended");
    assert!(the_game
        .reasons
        .iter()
        .any(|reason| reason == "Liked by users with similar taste"));
}

#[test]
fn filter_surface_lists_catalog_classes() {
    let app = app_with_user("ada");
    assert_eq!(app.rating_classes(), vec!["G", "PG", "PG-13", "R"]);
}
