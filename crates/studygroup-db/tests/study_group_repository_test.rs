//! Integration tests for the StudyGroup repository using in-memory SurrealDB.

use chrono::{TimeZone, Utc};
use studygroup_core::error::StudyGroupError;
use studygroup_core::models::study_group::{SortingOrder, StudyGroup, Subject};
use studygroup_core::models::user::User;
use studygroup_core::repository::StudyGroupRepository;
use studygroup_db::repository::SurrealStudyGroupRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};

/// Helper: spin up in-memory DB and run migrations.
async fn setup() -> SurrealStudyGroupRepository<Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    studygroup_db::run_migrations(&db).await.unwrap();
    SurrealStudyGroupRepository::new(db)
}

fn new_group(name: &str, subject: Subject, creator: i64) -> StudyGroup {
    StudyGroup::new(0, name, subject, Utc::now(), vec![User::new(creator)]).unwrap()
}

/// Insert the three sample groups, newest first.
async fn seed_dated(repo: &SurrealStudyGroupRepository<Db>) {
    let samples = [
        ("Math Club", Subject::Math, 2025, 1, 1),
        ("Physics Friends", Subject::Physics, 2024, 5, 1),
        ("Chemistry Crew", Subject::Chemistry, 2023, 10, 15),
    ];
    for (name, subject, y, m, d) in samples {
        let date = Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap();
        let group = StudyGroup::new(0, name, subject, date, vec![User::new(1)]).unwrap();
        repo.create_study_group(group).await.unwrap();
    }
}

#[tokio::test]
async fn create_assigns_sequential_ids() {
    let repo = setup().await;

    let first = repo
        .create_study_group(new_group("Math Club", Subject::Math, 1))
        .await
        .unwrap();
    let second = repo
        .create_study_group(new_group("Physics Lovers", Subject::Physics, 2))
        .await
        .unwrap();

    assert_eq!(first.id(), 1);
    assert_eq!(second.id(), 2);
}

#[tokio::test]
async fn create_and_get_study_group() {
    let repo = setup().await;
    let group = new_group("Physics Lovers", Subject::Physics, 7);
    let create_date = group.create_date();

    let created = repo.create_study_group(group).await.unwrap();
    let fetched = repo.get_study_group(created.id()).await.unwrap();

    assert_eq!(fetched.name(), "Physics Lovers");
    assert_eq!(fetched.subject(), Subject::Physics);
    assert_eq!(fetched.create_date(), create_date);
    assert_eq!(fetched.members(), &[User::new(7)]);
}

#[tokio::test]
async fn get_unknown_group_is_not_found() {
    let repo = setup().await;

    let err = repo.get_study_group(42).await.unwrap_err();
    assert!(matches!(err, StudyGroupError::NotFound { .. }));
}

#[tokio::test]
async fn list_returns_groups_in_insertion_order() {
    let repo = setup().await;
    seed_dated(&repo).await;

    let groups = repo.get_study_groups().await.unwrap();
    let names: Vec<_> = groups.iter().map(StudyGroup::name).collect();
    assert_eq!(names, vec!["Math Club", "Physics Friends", "Chemistry Crew"]);
}

#[tokio::test]
async fn list_empty_store() {
    let repo = setup().await;
    assert!(repo.get_study_groups().await.unwrap().is_empty());
}

#[tokio::test]
async fn search_filters_by_name() {
    let repo = setup().await;
    seed_dated(&repo).await;
    repo.create_study_group(new_group("Math Lab", Subject::Math, 2))
        .await
        .unwrap();

    let groups = repo
        .search_study_groups("Math", SortingOrder::Descending)
        .await
        .unwrap();

    assert_eq!(groups.len(), 2);
    assert!(groups.iter().all(|g| g.name().contains("Math")));
}

#[tokio::test]
async fn search_without_matches_is_empty() {
    let repo = setup().await;
    seed_dated(&repo).await;

    let groups = repo
        .search_study_groups("Biology", SortingOrder::Ascending)
        .await
        .unwrap();
    assert!(groups.is_empty());
}

#[tokio::test]
async fn search_sorts_by_create_date() {
    let repo = setup().await;
    seed_dated(&repo).await;

    // The empty filter matches every group.
    let ascending = repo
        .search_study_groups("", SortingOrder::Ascending)
        .await
        .unwrap();
    let dates: Vec<_> = ascending
        .iter()
        .map(|g| g.create_date().format("%Y-%m-%d").to_string())
        .collect();
    assert_eq!(dates, vec!["2023-10-15", "2024-05-01", "2025-01-01"]);

    let descending = repo
        .search_study_groups("", SortingOrder::Descending)
        .await
        .unwrap();
    let dates: Vec<_> = descending
        .iter()
        .map(|g| g.create_date().format("%Y-%m-%d").to_string())
        .collect();
    assert_eq!(dates, vec!["2025-01-01", "2024-05-01", "2023-10-15"]);
}

#[tokio::test]
async fn join_and_leave_study_group() {
    let repo = setup().await;
    let group = repo
        .create_study_group(new_group("Chem Group", Subject::Chemistry, 1))
        .await
        .unwrap();

    repo.join_study_group(group.id(), 101).await.unwrap();
    repo.join_study_group(group.id(), 102).await.unwrap();
    let fetched = repo.get_study_group(group.id()).await.unwrap();
    assert_eq!(
        fetched.members(),
        &[User::new(1), User::new(101), User::new(102)]
    );

    repo.leave_study_group(group.id(), 101).await.unwrap();
    let fetched = repo.get_study_group(group.id()).await.unwrap();
    assert_eq!(fetched.members(), &[User::new(1), User::new(102)]);
}

#[tokio::test]
async fn leave_as_non_member_is_noop() {
    let repo = setup().await;
    let group = repo
        .create_study_group(new_group("Chem Group", Subject::Chemistry, 1))
        .await
        .unwrap();

    repo.leave_study_group(group.id(), 999).await.unwrap();

    let fetched = repo.get_study_group(group.id()).await.unwrap();
    assert_eq!(fetched.members(), &[User::new(1)]);
}

#[tokio::test]
async fn join_unknown_group_is_not_found() {
    let repo = setup().await;

    let err = repo.join_study_group(404, 1).await.unwrap_err();
    assert!(matches!(err, StudyGroupError::NotFound { .. }));
}

#[tokio::test]
async fn leave_unknown_group_is_not_found() {
    let repo = setup().await;

    let err = repo.leave_study_group(5, 1).await.unwrap_err();
    assert!(matches!(err, StudyGroupError::NotFound { .. }));
}

#[tokio::test]
async fn search_is_case_sensitive() {
    let repo = setup().await;
    seed_dated(&repo).await;

    let lower = repo
        .search_study_groups("math", SortingOrder::Ascending)
        .await
        .unwrap();
    assert!(lower.is_empty());

    let prefix = repo
        .search_study_groups("Mat", SortingOrder::Ascending)
        .await
        .unwrap();
    assert_eq!(prefix.len(), 1);
}

#[tokio::test]
async fn user_has_group_for_subject() {
    let repo = setup().await;
    let group = repo
        .create_study_group(new_group("Math Club", Subject::Math, 1))
        .await
        .unwrap();
    repo.join_study_group(group.id(), 2).await.unwrap();

    assert!(repo.user_has_group_for_subject(1, Subject::Math).await.unwrap());
    assert!(repo.user_has_group_for_subject(2, Subject::Math).await.unwrap());
    assert!(!repo.user_has_group_for_subject(1, Subject::Physics).await.unwrap());
    assert!(!repo.user_has_group_for_subject(3, Subject::Math).await.unwrap());
}
