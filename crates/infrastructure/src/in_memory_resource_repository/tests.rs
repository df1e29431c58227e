use bizreviews_application::ResourceRepository;
use bizreviews_core::{AppError, ResourceId};
use bizreviews_domain::{FieldMap, ResourceKind};
use serde_json::{Value, json};

use super::InMemoryResourceRepository;

fn fields(value: Value) -> FieldMap {
    value.as_object().cloned().unwrap_or_default()
}

#[tokio::test]
async fn ids_are_sequential_per_table() {
    let repository = InMemoryResourceRepository::new();

    let photo = repository
        .insert(ResourceKind::Photo, fields(json!({"userid": 1, "businessid": 2})))
        .await;
    let review = repository
        .insert(
            ResourceKind::Review,
            fields(json!({"userid": 1, "businessid": 2, "dollars": 1, "stars": 2})),
        )
        .await;
    let second_photo = repository
        .insert(ResourceKind::Photo, fields(json!({"userid": 1, "businessid": 2})))
        .await;

    assert!(matches!(photo, Ok(id) if id == ResourceId::new(1)));
    assert!(matches!(review, Ok(id) if id == ResourceId::new(1)));
    assert!(matches!(second_photo, Ok(id) if id == ResourceId::new(2)));
}

#[tokio::test]
async fn update_merges_supplied_columns() {
    let repository = InMemoryResourceRepository::new();
    let id = repository
        .insert(
            ResourceKind::Photo,
            fields(json!({"userid": 1, "businessid": 2, "caption": "x"})),
        )
        .await
        .unwrap_or_else(|_| unreachable!());

    let affected = repository
        .update(
            ResourceKind::Photo,
            id,
            fields(json!({"userid": 1, "businessid": 2})),
        )
        .await;
    assert!(matches!(affected, Ok(1)));

    let row = repository
        .select_by_id(ResourceKind::Photo, id)
        .await
        .ok()
        .flatten()
        .unwrap_or_else(|| panic!("photo row should exist"));
    assert_eq!(row.fields().get("caption"), Some(&json!("x")));
}

#[tokio::test]
async fn review_owner_pairs_are_unique() {
    let repository = InMemoryResourceRepository::new();
    let review = json!({"userid": 7, "businessid": 3, "dollars": 2, "stars": 4});

    assert!(
        repository
            .insert(ResourceKind::Review, fields(review.clone()))
            .await
            .is_ok()
    );
    let duplicate = repository
        .insert(ResourceKind::Review, fields(review))
        .await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    let photo = json!({"userid": 7, "businessid": 3});
    for _ in 0..2 {
        assert!(
            repository
                .insert(ResourceKind::Photo, fields(photo.clone()))
                .await
                .is_ok()
        );
    }
}

#[tokio::test]
async fn missing_rows_report_zero_affected() {
    let repository = InMemoryResourceRepository::new();
    let missing = ResourceId::new(9);

    assert!(matches!(
        repository
            .update(ResourceKind::Photo, missing, fields(json!({"userid": 1})))
            .await,
        Ok(0)
    ));
    assert!(matches!(
        repository.delete_by_id(ResourceKind::Photo, missing).await,
        Ok(0)
    ));
    assert!(matches!(
        repository.select_by_id(ResourceKind::Photo, missing).await,
        Ok(None)
    ));
}

#[tokio::test]
async fn list_by_business_filters_rows() {
    let repository = InMemoryResourceRepository::new();
    for businessid in [3, 3, 4] {
        assert!(
            repository
                .insert(
                    ResourceKind::Photo,
                    fields(json!({"userid": 1, "businessid": businessid})),
                )
                .await
                .is_ok()
        );
    }

    let listed = repository.list_by_business(ResourceKind::Photo, 3).await;
    assert!(matches!(listed, Ok(rows) if rows.len() == 2));
}
