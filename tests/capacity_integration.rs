//! Integration tests for the capacity service
//!
//! These tests verify that the service reads teams, members and absences
//! through the repository traits and produces the expected weekly report,
//! including store edits between two runs.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use team_capacity::capacity::{
    group_by_week, CapacityCalculator, CapacityLevel, CapacityOptions, CapacityService,
};
use team_capacity::domain::absence::{Absence, DateRange};
use team_capacity::domain::member::Member;
use team_capacity::domain::repositories::{AbsenceRepository, MemberRepository, TeamRepository};
use team_capacity::domain::team::Team;
use team_capacity::infrastructure::repositories::InMemoryRosterRepository;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn service(repo: Arc<InMemoryRosterRepository>, weeks: u32) -> CapacityService<InMemoryRosterRepository> {
    let options = CapacityOptions {
        horizon_weeks: weeks,
        ..CapacityOptions::default()
    };
    CapacityService::new(repo, CapacityCalculator::new(options))
}

/// Seed two teams: Alpha with two members, Empty with none
async fn seed(repo: &InMemoryRosterRepository) -> (Team, Vec<Member>) {
    let alpha = Team::new("Alpha").expect("valid team");
    let empty = Team::new("Empty").expect("valid team");
    repo.add_team(&alpha).await.expect("add Alpha");
    repo.add_team(&empty).await.expect("add Empty");

    let members = vec![
        Member::new(alpha.id(), "Alice").expect("valid member"),
        Member::new(alpha.id(), "Bob").expect("valid member"),
    ];
    for member in &members {
        repo.add_member(member).await.expect("add member");
    }

    (alpha, members)
}

#[tokio::test]
async fn test_report_covers_every_team_and_week() {
    let repo = Arc::new(InMemoryRosterRepository::new());
    seed(&repo).await;

    let report = service(repo.clone(), 4)
        .weekly_capacity(date(2025, 3, 3))
        .await
        .expect("report");

    assert_eq!(report.len(), 8, "two teams over four weeks");

    let grouped = group_by_week(&report);
    let weeks: Vec<String> = grouped.keys().map(|w| w.to_string()).collect();
    assert_eq!(weeks, vec!["2025-W10", "2025-W11", "2025-W12", "2025-W13"]);

    for entries in grouped.values() {
        let names: Vec<&str> = entries.iter().map(|e| e.team_name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Empty"], "team order follows the store");
    }
}

#[tokio::test]
async fn test_absence_and_empty_team() {
    let repo = Arc::new(InMemoryRosterRepository::new());
    let (_, members) = seed(&repo).await;

    let absence = Absence::new(members[0].id(), date(2025, 3, 3), date(2025, 3, 7)).unwrap();
    repo.add_absence(&absence).await.expect("add absence");

    let report = service(repo.clone(), 1)
        .weekly_capacity(date(2025, 3, 5))
        .await
        .expect("report");

    let alpha = &report[0];
    assert_eq!(alpha.team_name, "Alpha");
    assert_eq!(alpha.percentage_absence, Decimal::from(50));
    assert!(!alpha.alert, "exactly 50% is not an alert");
    assert_eq!(alpha.level, CapacityLevel::Medium);

    let empty = &report[1];
    assert_eq!(empty.percentage_absence, Decimal::ZERO);
    assert!(!empty.alert);
    assert_eq!(empty.level, CapacityLevel::Unknown);
}

#[tokio::test]
async fn test_updating_absence_changes_report() {
    let repo = Arc::new(InMemoryRosterRepository::new());
    let (_, members) = seed(&repo).await;

    let absence = Absence::new(members[1].id(), date(2025, 3, 3), date(2025, 3, 4)).unwrap();
    repo.add_absence(&absence).await.expect("add absence");

    let svc = service(repo.clone(), 1);
    let before = svc.weekly_capacity(date(2025, 3, 3)).await.expect("report");
    assert_eq!(before[0].percentage_absence, Decimal::from(20));

    let longer = DateRange::new(date(2025, 3, 3), date(2025, 3, 9)).unwrap();
    repo.update_absence(absence.id(), longer).await.expect("update");

    let after = svc.weekly_capacity(date(2025, 3, 3)).await.expect("report");
    assert_eq!(after[0].percentage_absence, Decimal::from(50));
}

#[tokio::test]
async fn test_both_members_out_raises_alert() {
    let repo = Arc::new(InMemoryRosterRepository::new());
    let (_, members) = seed(&repo).await;

    for member in &members {
        let absence = Absence::new(member.id(), date(2025, 3, 5), date(2025, 3, 7)).unwrap();
        repo.add_absence(&absence).await.expect("add absence");
    }

    let report = service(repo.clone(), 1)
        .weekly_capacity(date(2025, 3, 3))
        .await
        .expect("report");

    assert_eq!(report[0].percentage_absence, Decimal::from(60));
    assert!(report[0].alert);
    assert_eq!(report[0].level, CapacityLevel::High);
}

#[tokio::test]
async fn test_deleted_member_no_longer_counts() {
    let repo = Arc::new(InMemoryRosterRepository::new());
    let (_, members) = seed(&repo).await;

    let absence = Absence::new(members[0].id(), date(2025, 3, 3), date(2025, 3, 7)).unwrap();
    repo.add_absence(&absence).await.expect("add absence");
    repo.delete_member(members[0].id()).await.expect("delete member");

    let report = service(repo.clone(), 1)
        .weekly_capacity(date(2025, 3, 3))
        .await
        .expect("report");

    assert_eq!(report[0].member_count, 1);
    assert_eq!(report[0].percentage_absence, Decimal::ZERO);
}

#[tokio::test]
async fn test_easter_week_holiday_uplift() {
    // Easter Monday 2025-04-21 opens 2025-W17
    let repo = Arc::new(InMemoryRosterRepository::new());
    seed(&repo).await;

    let report = service(repo.clone(), 1)
        .weekly_capacity(date(2025, 4, 23))
        .await
        .expect("report");

    assert_eq!(report[0].week_id.to_string(), "2025-W17");
    assert_eq!(report[0].holidays, vec![date(2025, 4, 21)]);
    assert_eq!(report[0].percentage_absence, Decimal::from(20));
}

#[tokio::test]
async fn test_empty_store_gives_empty_report() {
    let repo = Arc::new(InMemoryRosterRepository::new());

    let report = service(repo, 26)
        .weekly_capacity(date(2025, 1, 1))
        .await
        .expect("report");

    assert!(report.is_empty());
}
