//! Tests for the journey service.

use std::sync::Arc;

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ErrorCode;
use crate::domain::JourneyFields;
use crate::domain::ports::MockJourneyRepository;

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn service(repo: MockJourneyRepository) -> JourneyService<MockJourneyRepository> {
    JourneyService::new(
        Arc::new(repo),
        Arc::new(FixtureClock {
            utc_now: fixed_now(),
        }),
    )
}

#[fixture]
fn draft() -> JourneyDraft {
    let start = fixed_now() + Duration::days(30);
    JourneyDraft::try_from(JourneyFields {
        title: "Trip".to_owned(),
        location: "Japan".to_owned(),
        start_date: start,
        end_date: start + Duration::days(7),
        description: String::new(),
        logged_in_user_name: "elenaG".to_owned(),
    })
    .expect("valid draft")
}

#[fixture]
fn stored(draft: JourneyDraft) -> Journey {
    Journey::new(JourneyId::random(), draft, fixed_now())
}

#[rstest]
#[tokio::test]
async fn create_assigns_id_and_clock_timestamp(draft: JourneyDraft) {
    let mut repo = MockJourneyRepository::new();
    repo.expect_insert().times(1).return_once(|_| Ok(()));

    let journey = service(repo).create(draft.clone()).await.expect("create");

    assert_eq!(journey.created(), fixed_now());
    assert_eq!(journey.content(), &draft);
}

#[rstest]
#[tokio::test]
async fn create_maps_connection_error_to_service_unavailable(draft: JourneyDraft) {
    let mut repo = MockJourneyRepository::new();
    repo.expect_insert()
        .times(1)
        .return_once(|_| Err(JourneyRepositoryError::connection("pool exhausted")));

    let error = service(repo).create(draft).await.expect_err("unavailable");
    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

#[rstest]
#[tokio::test]
async fn get_returns_not_found_when_missing() {
    let mut repo = MockJourneyRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

    let error = service(repo)
        .get(&JourneyId::random())
        .await
        .expect_err("missing");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn update_writes_merged_journey(stored: Journey) {
    let id = *stored.id();
    let current = stored.clone();
    let mut repo = MockJourneyRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(current)));
    repo.expect_update()
        .times(1)
        .withf(move |journey| {
            journey.id() == &id
                && journey.title() == "Trip 2"
                && journey.location() == "Korea"
                && journey.start_date() == stored.start_date()
                && journey.created() == stored.created()
        })
        .return_once(|_| Ok(true));

    let patch = JourneyPatch {
        title: Some("Trip 2".to_owned()),
        location: Some("Korea".to_owned()),
        ..JourneyPatch::default()
    };
    service(repo).update(&id, patch).await.expect("update");
}

#[rstest]
#[tokio::test]
async fn update_rejects_invalid_range_without_writing(stored: Journey) {
    let id = *stored.id();
    let end = stored.start_date() - Duration::days(1);
    let mut repo = MockJourneyRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(stored)));
    repo.expect_update().times(0);

    let patch = JourneyPatch {
        end_date: Some(end),
        ..JourneyPatch::default()
    };
    let error = service(repo).update(&id, patch).await.expect_err("invalid");
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn update_of_missing_journey_is_not_found() {
    let mut repo = MockJourneyRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));
    repo.expect_update().times(0);

    let error = service(repo)
        .update(&JourneyId::random(), JourneyPatch::default())
        .await
        .expect_err("missing");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn update_reports_not_found_when_document_vanishes(stored: Journey) {
    let id = *stored.id();
    let mut repo = MockJourneyRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(stored)));
    repo.expect_update().times(1).return_once(|_| Ok(false));

    let patch = JourneyPatch {
        title: Some("Later".to_owned()),
        ..JourneyPatch::default()
    };
    let error = service(repo).update(&id, patch).await.expect_err("gone");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[case(true, None)]
#[case(false, Some(ErrorCode::NotFound))]
#[tokio::test]
async fn delete_reports_missing_journeys(
    #[case] deleted: bool,
    #[case] expected: Option<ErrorCode>,
) {
    let mut repo = MockJourneyRepository::new();
    repo.expect_delete()
        .times(1)
        .return_once(move |_| Ok(deleted));

    let outcome = service(repo).delete(&JourneyId::random()).await;
    assert_eq!(outcome.err().map(|err| err.code()), expected);
}

#[rstest]
#[tokio::test]
async fn list_for_user_maps_query_failure_to_internal() {
    let mut repo = MockJourneyRepository::new();
    repo.expect_list_by_owner()
        .times(1)
        .return_once(|_| Err(JourneyRepositoryError::query("syntax error")));

    let error = service(repo)
        .list_for_user("elenaG")
        .await
        .expect_err("query failure");
    assert_eq!(error.code(), ErrorCode::InternalError);
}
