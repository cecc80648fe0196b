use std::sync::Arc;

use autos::contract::model::{AutomobilePatch, NewAutomobile};
use autos::domain::error::DomainError;
use autos::domain::service::Service;

mod common;
use common::{fleet, mock_service, mustang, FailingAutosRepository};

#[tokio::test]
async fn get_autos_without_params_returns_everything() {
    let (_, service) = mock_service(fleet());

    let list = service.get_autos().await.unwrap();
    assert_eq!(list.len(), 5);
    assert_eq!(
        list.iter().map(|a| a.vin.as_str()).collect::<Vec<_>>(),
        ["VIN001", "VIN002", "VIN003", "VIN004", "VIN005"]
    );
}

#[tokio::test]
async fn get_autos_on_empty_store_is_empty_not_error() {
    let (_, service) = mock_service(vec![]);

    let list = service.get_autos().await.unwrap();
    assert!(list.is_empty());
}

#[tokio::test]
async fn find_autos_matches_substrings_on_both_fields() {
    let (_, service) = mock_service(fleet());

    let list = service.find_autos(Some("RED"), Some("Ford")).await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.iter().next().unwrap().vin, "VIN001");

    // "DARK RED" contains "RED"
    let reds = service.find_autos(Some("RED"), None).await.unwrap();
    assert_eq!(reds.len(), 2);

    let fords = service.find_autos(None, Some("Ford")).await.unwrap();
    assert_eq!(fords.len(), 3);
}

#[tokio::test]
async fn find_autos_without_match_is_empty() {
    let (_, service) = mock_service(fleet());

    let list = service.find_autos(Some("PURPLE"), Some("Ford")).await.unwrap();
    assert!(list.is_empty());
}

#[tokio::test]
async fn wildcard_filters_match_the_unfiltered_list() {
    let (_, service) = mock_service(fleet());

    let all = service.get_autos().await.unwrap();
    let filtered = service.find_autos(None, None).await.unwrap();
    assert_eq!(all, filtered);

    // every make in the fleet contains an "o"
    let broad = service.find_autos(None, Some("o")).await.unwrap();
    assert_eq!(all, broad);
}

#[tokio::test]
async fn add_auto_returns_stored_record_with_id() {
    let (repo, service) = mock_service(vec![]);

    let auto = service.add_auto(mustang()).await.unwrap();
    assert_eq!(auto.vin, "AABBCC");
    assert_eq!(auto.make, "Ford");
    assert!(auto.id > 0);
    assert_eq!(repo.snapshot().len(), 1);
}

#[tokio::test]
async fn add_auto_rejects_duplicate_vin() {
    let (repo, service) = mock_service(vec![mustang()]);

    let err = service
        .add_auto(NewAutomobile::new(2001, "Dodge", "Viper", "AABBCC"))
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::vin_already_exists("AABBCC"));
    assert_eq!(repo.snapshot().len(), 1);
}

#[tokio::test]
async fn get_auto_by_vin() {
    let (_, service) = mock_service(vec![mustang()]);

    let auto = service.get_auto("AABBCC").await.unwrap();
    assert_eq!(auto.model, "Mustang");

    let err = service.get_auto("NOPE").await.unwrap_err();
    assert_eq!(err, DomainError::auto_not_found("NOPE"));
}

#[tokio::test]
async fn update_owner_only_keeps_color() {
    let (repo, service) = mock_service(fleet());

    let updated = service
        .update_auto(
            "VIN001",
            AutomobilePatch {
                color: None,
                owner: Some("Robert Taylor".into()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.owner.as_deref(), Some("Robert Taylor"));
    assert_eq!(updated.color.as_deref(), Some("RED"));

    let stored = repo
        .snapshot()
        .into_iter()
        .find(|a| a.vin == "VIN001")
        .unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn update_unknown_vin_is_not_found_even_with_empty_patch() {
    let (_, service) = mock_service(fleet());

    let err = service
        .update_auto("NOPE", AutomobilePatch::default())
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::auto_not_found("NOPE"));
}

#[tokio::test]
async fn empty_patch_leaves_record_untouched() {
    let (repo, service) = mock_service(fleet());
    let before = repo.snapshot();

    let auto = service
        .update_auto("VIN002", AutomobilePatch::default())
        .await
        .unwrap();

    assert_eq!(auto.color.as_deref(), Some("GREEN"));
    assert_eq!(repo.snapshot(), before);
}

#[tokio::test]
async fn delete_succeeds_exactly_once() {
    let (repo, service) = mock_service(vec![mustang()]);

    service.delete_auto("AABBCC").await.unwrap();
    assert!(repo.snapshot().is_empty());

    let err = service.delete_auto("AABBCC").await.unwrap_err();
    assert_eq!(err, DomainError::auto_not_found("AABBCC"));
}

#[tokio::test]
async fn store_failures_surface_as_database_errors() {
    let service = Service::new(Arc::new(FailingAutosRepository));

    let err = service.get_autos().await.unwrap_err();
    assert!(matches!(err, DomainError::Database { .. }));

    let err = service.add_auto(mustang()).await.unwrap_err();
    assert!(matches!(err, DomainError::Database { .. }));

    let err = service.delete_auto("AABBCC").await.unwrap_err();
    assert!(matches!(err, DomainError::Database { .. }));
}

#[tokio::test]
async fn find_autos_treats_like_wildcards_literally() {
    let (_, service) = mock_service(fleet());

    assert!(service.find_autos(None, Some("F_rd")).await.unwrap().is_empty());
    assert!(service.find_autos(Some("%"), None).await.unwrap().is_empty());
}
