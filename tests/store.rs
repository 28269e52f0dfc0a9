mod common;

use common::{new_movie, store};
use topmovies::{
    error::AppError,
    models::{NewMovie, ReviewUpdate},
    ranking,
};

#[tokio::test]
async fn created_movie_reads_back_unchanged() {
    let store = store().await;

    let created = store.create(new_movie("Inception")).await.unwrap();
    let fetched = store.get(created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.title, "Inception");
    assert_eq!(fetched.year, 2010);
    assert_eq!(fetched.rating, None);
    assert_eq!(fetched.review, None);
    assert_eq!(fetched.ranking, None);
}

#[tokio::test]
async fn duplicate_title_is_rejected_without_changes() {
    let store = store().await;
    store.create(new_movie("Inception")).await.unwrap();

    let err = store.create(new_movie("Inception")).await.unwrap_err();
    assert!(matches!(err, AppError::DuplicateTitle(ref title) if title == "Inception"));

    let all = store.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn titles_are_trimmed_before_the_uniqueness_check() {
    let store = store().await;
    let heat = store
        .create(NewMovie { img_url: " https://img.example/heat.jpg ".into(), ..new_movie(" Heat ") })
        .await
        .unwrap();
    assert_eq!(heat.title, "Heat");
    assert_eq!(heat.img_url, "https://img.example/heat.jpg");

    let err = store.create(new_movie("Heat")).await.unwrap_err();
    assert!(matches!(err, AppError::DuplicateTitle(ref title) if title == "Heat"));
    assert_eq!(store.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn create_rejects_missing_or_oversized_fields() {
    let store = store().await;

    let blank = NewMovie { title: "  ".into(), ..new_movie("x") };
    assert!(matches!(store.create(blank).await, Err(AppError::Validation(_))));

    let no_poster = NewMovie { img_url: String::new(), ..new_movie("Heat") };
    assert!(matches!(store.create(no_poster).await, Err(AppError::Validation(_))));

    let wordy = NewMovie { description: "a".repeat(501), ..new_movie("Heat") };
    assert!(matches!(store.create(wordy).await, Err(AppError::Validation(_))));

    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_sets_rating_and_review() {
    let store = store().await;
    let movie = store.create(new_movie("Heat")).await.unwrap();

    let updated = store
        .update(movie.id, ReviewUpdate { rating: 8.5, review: Some("Tense".into()) })
        .await
        .unwrap();

    assert_eq!(updated.rating, Some(8.5));
    assert_eq!(updated.review.as_deref(), Some("Tense"));
    assert_eq!(store.get(movie.id).await.unwrap(), updated);
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let store = store().await;
    let movie = store.create(new_movie("Heat")).await.unwrap();

    let err = store.update(movie.id + 100, ReviewUpdate { rating: 1.0, review: None }).await;
    assert!(matches!(err, Err(AppError::NotFound(_))));

    assert_eq!(store.list_all().await.unwrap(), vec![movie]);
}

#[tokio::test]
async fn delete_removes_the_row() {
    let store = store().await;
    let movie = store.create(new_movie("Heat")).await.unwrap();

    store.delete(movie.id).await.unwrap();

    assert!(matches!(store.get(movie.id).await, Err(AppError::NotFound(_))));
    assert!(matches!(store.delete(movie.id).await, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn delete_unknown_id_leaves_store_alone() {
    let store = store().await;
    let movie = store.create(new_movie("Heat")).await.unwrap();

    assert!(matches!(store.delete(999).await, Err(AppError::NotFound(_))));
    assert_eq!(store.list_all().await.unwrap(), vec![movie]);
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let store = store().await;
    let first = store.create(new_movie("Heat")).await.unwrap();
    store.delete(first.id).await.unwrap();

    let second = store.create(new_movie("Ronin")).await.unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn listing_puts_unrated_first_then_ascending() {
    let store = store().await;
    let a = store.create(new_movie("A")).await.unwrap();
    let b = store.create(new_movie("B")).await.unwrap();
    store.create(new_movie("C")).await.unwrap();
    let d = store.create(new_movie("D")).await.unwrap();

    store.update(a.id, ReviewUpdate { rating: 9.0, review: None }).await.unwrap();
    store.update(b.id, ReviewUpdate { rating: 7.5, review: None }).await.unwrap();
    store.update(d.id, ReviewUpdate { rating: 7.5, review: None }).await.unwrap();

    let titles: Vec<String> =
        store.list_all().await.unwrap().into_iter().map(|m| m.title).collect();
    assert_eq!(titles, ["C", "B", "D", "A"]);
}

#[tokio::test]
async fn saved_rankings_persist_and_skip_vanished_rows() {
    let store = store().await;
    let a = store.create(new_movie("A")).await.unwrap();
    let b = store.create(new_movie("B")).await.unwrap();
    store.update(a.id, ReviewUpdate { rating: 9.0, review: None }).await.unwrap();
    store.update(b.id, ReviewUpdate { rating: 3.0, review: None }).await.unwrap();

    let mut movies = store.list_all().await.unwrap();
    ranking::assign_rankings(&mut movies);
    store.delete(b.id).await.unwrap();
    store.save_ranking(&movies).await.unwrap();

    assert_eq!(store.get(a.id).await.unwrap().ranking, Some(2));
    assert_eq!(store.list_all().await.unwrap().len(), 1);
}
