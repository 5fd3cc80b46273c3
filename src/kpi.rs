//! KPI aggregation over normalized project records.
//!
//! Pure, stateless reductions: same input, same output, nothing persisted.
//! Every function assumes records have already passed through
//! `loader::normalize_project`, so missing upstream fields are already 0.

use crate::types::{Alert, Project};
use crate::util::round1;
use serde::Serialize;

/// Derived dashboard metrics, recomputed on every call.
#[derive(Debug, Clone, Serialize)]
pub struct KpiSet {
    pub cash_flow_gap: f64,
    pub active_alerts: usize,
}

/// Sum of `budget_total - actual_spend` across all projects.
///
/// The empty sequence folds to 0, and the result is additive: the gap of a
/// concatenated list is the sum of the per-slice gaps.
pub fn cash_flow_gap(projects: &[Project]) -> f64 {
    projects
        .iter()
        .map(|p| p.budget_total - p.actual_spend)
        .sum()
}

/// Spend as a percentage of budget, rounded to one decimal place.
///
/// A zero budget is a defined-zero result, not a division error; without the
/// guard the formula produces NaN/infinity for unbudgeted projects.
pub fn efficiency_percent(project: &Project) -> f64 {
    if project.budget_total == 0.0 {
        return 0.0;
    }
    round1(project.actual_spend / project.budget_total * 100.0)
}

/// Count of unresolved alerts for the dashboard "Alerts" card.
pub fn count_active_alerts(alerts: &[Alert]) -> usize {
    alerts.iter().filter(|a| !a.resolved).count()
}

pub fn aggregate(projects: &[Project], alerts: &[Alert]) -> KpiSet {
    KpiSet {
        cash_flow_gap: cash_flow_gap(projects),
        active_alerts: count_active_alerts(alerts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(budget: f64, spend: f64) -> Project {
        Project {
            id: "p1".to_string(),
            name: "Tower A".to_string(),
            budget_total: budget,
            actual_spend: spend,
            progress_percent: 0.0,
            status: "Active".to_string(),
        }
    }

    #[test]
    fn gap_of_empty_list_is_zero() {
        assert_eq!(cash_flow_gap(&[]), 0.0);
    }

    #[test]
    fn gap_is_additive() {
        let a = project(1000.0, 250.0);
        let b = project(0.0, 500.0);
        let c = project(300.0, 300.0);
        let whole = cash_flow_gap(&[a.clone(), b.clone(), c.clone()]);
        let parts = cash_flow_gap(&[a]) + cash_flow_gap(&[b]) + cash_flow_gap(&[c]);
        assert_eq!(whole, parts);
        assert_eq!(whole, 250.0);
    }

    #[test]
    fn quarter_spent_project() {
        let p = project(1000.0, 250.0);
        assert_eq!(efficiency_percent(&p), 25.0);
        assert_eq!(cash_flow_gap(&[p]), 750.0);
    }

    #[test]
    fn zero_budget_guard() {
        let p = project(0.0, 500.0);
        assert_eq!(efficiency_percent(&p), 0.0);
        assert!(efficiency_percent(&p).is_finite());
        assert_eq!(cash_flow_gap(&[p]), -500.0);
    }

    #[test]
    fn efficiency_rounds_to_one_decimal() {
        let p = project(3000.0, 1000.0);
        // 33.333... rounds to 33.3
        assert_eq!(efficiency_percent(&p), 33.3);
    }

    #[test]
    fn active_alerts_ignore_resolved() {
        let alerts = vec![
            Alert {
                message: "Stock low".to_string(),
                resolved: false,
            },
            Alert {
                message: "Budget overrun".to_string(),
                resolved: true,
            },
            Alert {
                message: "Delivery delayed".to_string(),
                resolved: false,
            },
        ];
        assert_eq!(count_active_alerts(&alerts), 2);
        let kpis = aggregate(&[], &alerts);
        assert_eq!(kpis.cash_flow_gap, 0.0);
        assert_eq!(kpis.active_alerts, 2);
    }
}
