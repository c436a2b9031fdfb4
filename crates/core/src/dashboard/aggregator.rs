//! Pure dashboard aggregation
//!
//! Every statistic is a single pass over one collection; nothing here does
//! I/O, so the whole computation is deterministic given `now`.

use chrono::{DateTime, Utc};
use clientdesk_domain::constants::MILLIS_PER_HOUR;
use clientdesk_domain::{
    parse_due_date, Client, DashboardData, DashboardSummary, Invoice, Project, QuickStats, Task,
};

/// Compute the dashboard snapshot from full entity collections.
///
/// A task is overdue when it is not `done` and has a due date that parses and
/// lies strictly before `now`. Tasks without a usable due date are never
/// overdue.
pub fn aggregate(
    clients: &[Client],
    projects: &[Project],
    tasks: &[Task],
    invoices: &[Invoice],
    now: DateTime<Utc>,
) -> DashboardData {
    let active_projects = projects.iter().filter(|p| p.is_active()).count();
    let pending_tasks = tasks.iter().filter(|t| t.is_pending()).count();
    let completed_tasks = tasks.iter().filter(|t| t.is_done()).count();
    let overdue_items = tasks.iter().filter(|t| is_overdue(t, now)).count();

    let revenue: f64 =
        invoices.iter().filter(|i| i.is_paid()).map(|i| i.amount.unwrap_or(0.0)).sum();
    let tracked_millis: i64 = tasks.iter().map(|t| t.time_tracking.total_time).sum();
    let invoices_sent = invoices.iter().filter(|i| i.is_sent()).count();

    DashboardData {
        summary: DashboardSummary {
            total_clients: clients.len(),
            active_projects,
            pending_tasks,
            // Halves go to the even neighbour: paid 100.4 + 50.1 is 150.5 in f64
            monthly_revenue: revenue.round_ties_even() as i64,
            completed_tasks,
            overdue_items,
        },
        quick_stats: QuickStats {
            // No start-date filtering: every active project counts this week.
            projects_this_week: active_projects,
            tasks_completed: completed_tasks,
            hours_tracked: tracked_millis as f64 / MILLIS_PER_HOUR,
            invoices_sent,
        },
    }
}

fn is_overdue(task: &Task, now: DateTime<Utc>) -> bool {
    if task.is_done() {
        return false;
    }
    task.record
        .due_date
        .as_deref()
        .and_then(parse_due_date)
        .is_some_and(|due| due < now)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use clientdesk_domain::{
        InvoiceStatus, ProjectStatus, TaskRecord, TaskStatus, TimerState,
    };

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn task(id: i64, status: TaskStatus, due: Option<&str>, tracked_ms: i64) -> Task {
        let record = TaskRecord {
            id,
            title: None,
            priority: None,
            status: Some(status),
            due_date: due.map(str::to_string),
            remote_time_tracking: None,
            project_id: None,
        };
        Task::new(record, TimerState { total_time: tracked_ms, ..TimerState::default() })
    }

    fn invoice(id: i64, status: InvoiceStatus, amount: Option<f64>) -> Invoice {
        Invoice {
            id,
            amount,
            status: Some(status),
            due_date: None,
            payment_date: None,
            client_id: None,
            project_id: None,
        }
    }

    fn project(id: i64, status: ProjectStatus) -> Project {
        Project {
            id,
            name: None,
            status: Some(status),
            budget: None,
            start_date: None,
            end_date: None,
            client_id: None,
        }
    }

    #[test]
    fn empty_collections_give_zeroed_dashboard() {
        assert_eq!(aggregate(&[], &[], &[], &[], now()), DashboardData::default());
    }

    #[test]
    fn counts_pending_completed_and_overdue() {
        let tasks = vec![
            task(1, TaskStatus::Todo, Some("2020-01-01"), 0),
            task(2, TaskStatus::Done, Some("2099-01-01"), 0),
        ];

        let data = aggregate(&[], &[], &tasks, &[], now());

        assert_eq!(data.summary.pending_tasks, 1);
        assert_eq!(data.summary.completed_tasks, 1);
        assert_eq!(data.summary.overdue_items, 1);
        assert_eq!(data.quick_stats.tasks_completed, 1);
    }

    #[test]
    fn done_and_undated_tasks_are_never_overdue() {
        let tasks = vec![
            task(1, TaskStatus::Done, Some("2020-01-01"), 0),
            task(2, TaskStatus::Review, None, 0),
            task(3, TaskStatus::InProgress, Some("not a date"), 0),
            task(4, TaskStatus::Review, Some("2024-06-01T11:59:59Z"), 0),
        ];

        let data = aggregate(&[], &[], &tasks, &[], now());

        assert_eq!(data.summary.overdue_items, 1);
        assert_eq!(data.summary.pending_tasks, 1);
    }

    #[test]
    fn due_exactly_now_is_not_overdue() {
        let tasks = vec![task(1, TaskStatus::Todo, Some("2024-06-01T12:00:00Z"), 0)];
        assert_eq!(aggregate(&[], &[], &tasks, &[], now()).summary.overdue_items, 0);
    }

    #[test]
    fn revenue_sums_paid_invoices_and_rounds() {
        let invoices = vec![
            invoice(1, InvoiceStatus::Paid, Some(100.4)),
            invoice(2, InvoiceStatus::Paid, Some(50.1)),
            invoice(3, InvoiceStatus::Sent, Some(10.0)),
            invoice(4, InvoiceStatus::Paid, None),
        ];

        let data = aggregate(&[], &[], &[], &invoices, now());

        assert_eq!(data.summary.monthly_revenue, 150);
        assert_eq!(data.quick_stats.invoices_sent, 1);
    }

    #[test]
    fn revenue_ties_round_to_even() {
        let at = |amount| {
            let invoices = vec![invoice(1, InvoiceStatus::Paid, Some(amount))];
            aggregate(&[], &[], &[], &invoices, now()).summary.monthly_revenue
        };

        assert_eq!(at(150.5), 150);
        assert_eq!(at(151.5), 152);
        assert_eq!(at(150.6), 151);
        assert_eq!(at(150.4), 150);
    }

    #[test]
    fn hours_tracked_converts_total_time() {
        let tasks = vec![
            task(1, TaskStatus::Todo, None, 5_400_000),
            task(2, TaskStatus::Done, None, 1_800_000),
        ];

        let data = aggregate(&[], &[], &tasks, &[], now());

        assert!((data.quick_stats.hours_tracked - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn projects_this_week_mirrors_active_projects() {
        let projects = vec![
            project(1, ProjectStatus::Active),
            project(2, ProjectStatus::Planning),
            project(3, ProjectStatus::Active),
            project(4, ProjectStatus::Other("archived".into())),
        ];

        let data = aggregate(&[], &projects, &[], &[], now());

        assert_eq!(data.summary.active_projects, 2);
        assert_eq!(data.quick_stats.projects_this_week, 2);
    }
}
