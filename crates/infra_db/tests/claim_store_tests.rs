//! Integration tests for the PostgreSQL claim store
//!
//! These tests start a PostgreSQL container and need a running Docker daemon.
//! Run them with `cargo test -p infra_db -- --ignored`.

use core_kernel::HealthCheckable;
use domain_claims::{generate_claim_id, ClaimLookupPort, ClaimStatus, ClaimStorePort};
use test_utils::{create_isolated_test_database, ClaimFixtures};

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_health_check_against_live_database() {
    let db = create_isolated_test_database().await.unwrap();
    let store = db.claim_store();

    assert!(store.health_check().await.is_healthy());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_insert_then_find_by_claim_id() {
    let db = create_isolated_test_database().await.unwrap();
    let store = db.claim_store();
    let record = ClaimFixtures::draft_record();

    store.insert_claim(&record).await.unwrap();

    let found = store
        .find_by_claim_id(&record.claim_id)
        .await
        .unwrap()
        .expect("claim should be stored");
    // Timestamps lose sub-microsecond precision in PostgreSQL
    assert_eq!(found.id, record.id);
    assert_eq!(found.claim_id, record.claim_id);
    assert_eq!(found.claim_check_code, record.claim_check_code);
    assert_eq!(found.member_no, record.member_no);
    assert_eq!(found.type_of_service, record.type_of_service);
    assert_eq!(found.status, ClaimStatus::Draft);
    assert!(store.claim_id_exists(&record.claim_id).await.unwrap());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_duplicate_claim_id_is_a_conflict() {
    let db = create_isolated_test_database().await.unwrap();
    let store = db.claim_store();
    let first = ClaimFixtures::draft_record();
    let mut second = ClaimFixtures::draft_record_with_id(first.claim_id);
    second.id = core_kernel::ClaimId::new_v7();

    store.insert_claim(&first).await.unwrap();
    let err = store.insert_claim(&second).await.unwrap_err();

    assert!(err.is_conflict(), "expected conflict, got {err:?}");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_generated_identifier_is_free_in_database() {
    let db = create_isolated_test_database().await.unwrap();
    let store = db.claim_store();
    store.insert_claim(&ClaimFixtures::draft_record()).await.unwrap();

    let claim_id = generate_claim_id(&store).await.unwrap();

    assert!(!store.claim_id_exists(&claim_id).await.unwrap());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_status_persists_finalization() {
    let db = create_isolated_test_database().await.unwrap();
    let store = db.claim_store();
    let mut record = ClaimFixtures::draft_record();
    store.insert_claim(&record).await.unwrap();

    record.finalize().unwrap();
    store.update_status(&record).await.unwrap();

    let found = store.find_by_claim_id(&record.claim_id).await.unwrap().unwrap();
    assert_eq!(found.status, ClaimStatus::Finalized);
    assert!(found.finalized_at.is_some());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_status_of_missing_claim_is_not_found() {
    let db = create_isolated_test_database().await.unwrap();
    let store = db.claim_store();
    let mut record = ClaimFixtures::draft_record();
    record.finalize().unwrap();

    let err = store.update_status(&record).await.unwrap_err();
    assert!(err.is_not_found());
}
