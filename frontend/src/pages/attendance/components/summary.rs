use crate::{api::AttendanceSummary, pages::attendance::utils::summary_stats};
use leptos::*;

#[component]
pub fn AttendanceSummaryStats(summary: AttendanceSummary) -> impl IntoView {
    view! {
        <div class="summary-stats flex gap-4 text-sm">
            {summary_stats(&summary)
                .into_iter()
                .map(|(label, value)| {
                    view! { <span class="stat font-semibold">{format!("{} {}", label, value)}</span> }
                })
                .collect_view()}
        </div>
    }
}
