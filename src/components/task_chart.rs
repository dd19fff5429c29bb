//! Task Chart Component
//!
//! Status distribution of the user's tasks as proportional bars.

use leptos::prelude::*;

use crate::models::UserSummary;

struct Slice {
    label: &'static str,
    class: &'static str,
    value: u32,
    percent: f64,
}

/// Bar widths for the summary counts. Percentages are relative to the
/// largest bucket so the widest bar always fills the row.
fn distribution(summary: &UserSummary) -> Vec<Slice> {
    let buckets = [
        ("Assigned", "chart-bar assigned", summary.assigned_tasks),
        ("Completed", "chart-bar completed", summary.completed_tasks),
        ("Overdue", "chart-bar overdue", summary.overdue_tasks),
        ("Due Soon", "chart-bar due-soon", summary.soon_due_tasks),
    ];
    let max = buckets.iter().map(|(_, _, value)| *value).max().unwrap_or(0);
    buckets
        .into_iter()
        .map(|(label, class, value)| Slice {
            label,
            class,
            value,
            percent: if max == 0 {
                0.0
            } else {
                value as f64 * 100.0 / max as f64
            },
        })
        .collect()
}

#[component]
pub fn TaskChart(summary: UserSummary) -> impl IntoView {
    view! {
        <div class="chart-container">
            <h2 class="chart-heading">"Task Status Overview"</h2>
            {distribution(&summary).into_iter().map(|slice| view! {
                <div class="chart-row">
                    <span class="chart-label">{slice.label}</span>
                    <div class="chart-track">
                        <div
                            class=slice.class
                            style=format!("width: {:.0}%;", slice.percent)
                        ></div>
                    </div>
                    <span class="chart-value">{slice.value}</span>
                </div>
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution() {
        let summary = UserSummary {
            assigned_tasks: 8,
            completed_tasks: 4,
            overdue_tasks: 2,
            soon_due_tasks: 0,
        };
        let slices = distribution(&summary);
        assert_eq!(slices.len(), 4);
        assert_eq!(slices[0].percent, 100.0);
        assert_eq!(slices[1].percent, 50.0);
        assert_eq!(slices[2].percent, 25.0);
        assert_eq!(slices[3].percent, 0.0);
    }

    #[test]
    fn test_distribution_all_zero() {
        let slices = distribution(&UserSummary::default());
        assert!(slices.iter().all(|slice| slice.percent == 0.0));
    }
}
