use newsroom::application::commands::posts::{DeletePostCommand, UpdatePostCommand};
use newsroom::application::error::ApplicationError;
use newsroom::application::queries::posts::GetPostByIdQuery;

mod support;

use support::{AUTHOR_ID, author_identity, build_test_context, fixed_now};

#[tokio::test]
async fn second_read_is_served_from_cache() {
    let ctx = build_test_context();
    let id = ctx.store.seed_post(AUTHOR_ID, "Budget", "Passed at night", fixed_now());
    let query = || GetPostByIdQuery { id: i64::from(id) };

    let first = ctx.services.post_queries.get_post_by_id(query()).await.unwrap();
    assert_eq!(ctx.store.post_reads(), 1);
    assert_eq!(ctx.cache.sets(), 1);
    assert!(ctx.cache.contains(i64::from(id)));

    let second = ctx.services.post_queries.get_post_by_id(query()).await.unwrap();
    assert_eq!(ctx.store.post_reads(), 1);
    assert_eq!(ctx.cache.sets(), 1);
    assert_eq!(first, second);
}

#[tokio::test]
async fn missing_post_is_not_found_and_not_cached() {
    let ctx = build_test_context();

    let err = ctx
        .services
        .post_queries
        .get_post_by_id(GetPostByIdQuery { id: 42 })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
    assert_eq!(ctx.cache.sets(), 0);
}

#[tokio::test]
async fn non_positive_id_is_not_found() {
    let ctx = build_test_context();

    let err = ctx
        .services
        .post_queries
        .get_post_by_id(GetPostByIdQuery { id: -3 })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
    assert_eq!(ctx.store.post_reads(), 0);
}

#[tokio::test]
async fn detail_output_is_censored_but_cache_keeps_original() {
    let ctx = build_test_context();
    let id = ctx
        .store
        .seed_post(AUTHOR_ID, "слово1 scandal", "It was слово2 indeed", fixed_now());

    let dto = ctx
        .services
        .post_queries
        .get_post_by_id(GetPostByIdQuery { id: i64::from(id) })
        .await
        .unwrap();

    assert_eq!(dto.header, "*** scandal");
    assert_eq!(dto.text, "It was *** indeed");
    assert_eq!(ctx.store.post(id).unwrap().header.as_str(), "слово1 scandal");
}

#[tokio::test]
async fn failing_cache_falls_back_to_store() {
    let ctx = build_test_context();
    let id = ctx.store.seed_post(AUTHOR_ID, "Weather", "Rain", fixed_now());
    ctx.cache.set_failing(true);

    for _ in 0..2 {
        ctx.services
            .post_queries
            .get_post_by_id(GetPostByIdQuery { id: i64::from(id) })
            .await
            .unwrap();
    }

    assert_eq!(ctx.store.post_reads(), 2);
}

#[tokio::test]
async fn edit_invalidates_cached_post() {
    let ctx = build_test_context();
    let id = ctx.store.seed_post(AUTHOR_ID, "Old header", "Body", fixed_now());
    let query = || GetPostByIdQuery { id: i64::from(id) };
    ctx.services.post_queries.get_post_by_id(query()).await.unwrap();

    ctx.services
        .post_commands
        .update_post(
            &author_identity(),
            UpdatePostCommand {
                id: i64::from(id),
                header: Some("New header".into()),
                text: None,
                categories: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(ctx.cache.invalidations(), 1);
    assert!(!ctx.cache.contains(i64::from(id)));

    let reads_before = ctx.store.post_reads();
    let fresh = ctx.services.post_queries.get_post_by_id(query()).await.unwrap();
    assert_eq!(ctx.store.post_reads(), reads_before + 1);
    assert_eq!(fresh.header, "New header");
}

#[tokio::test]
async fn delete_invalidates_cached_post() {
    let ctx = build_test_context();
    let id = ctx.store.seed_post(AUTHOR_ID, "Short lived", "Body", fixed_now());
    let query = || GetPostByIdQuery { id: i64::from(id) };
    ctx.services.post_queries.get_post_by_id(query()).await.unwrap();

    ctx.services
        .post_commands
        .delete_post(&author_identity(), DeletePostCommand { id: i64::from(id) })
        .await
        .unwrap();
    assert!(!ctx.cache.contains(i64::from(id)));

    let err = ctx.services.post_queries.get_post_by_id(query()).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}
