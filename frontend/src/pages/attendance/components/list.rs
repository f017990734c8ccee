use super::summary::AttendanceSummaryStats;
use crate::{
    api::AttendanceRecord,
    components::layout::{ErrorMessage, LoadingSpinner},
    pages::attendance::{
        repository::AttendanceOverview, utils::status_badge_class,
        view_model::use_attendance_list_view_model,
    },
    utils::time::format_record_date,
};
use leptos::*;

#[component]
pub fn AttendanceList(employee_id: i64) -> impl IntoView {
    let vm = use_attendance_list_view_model(employee_id);
    let resource = vm.overview_resource;

    view! {
        <div class="attendance-list space-y-3">
            <div class="flex items-center justify-between">
                <h4 class="text-sm font-semibold text-fg">"Attendance Records"</h4>
                <button
                    type="button"
                    class="text-xs text-action-primary-bg hover:underline"
                    on:click=move |_| vm.refresh()
                >
                    "Reload"
                </button>
            </div>
            {move || match resource.get() {
                None => view! { <LoadingSpinner label="Loading attendance..." /> }.into_view(),
                Some(Err(err)) => view! {
                    <ErrorMessage message=err.detail_or("Error loading attendance") />
                }
                .into_view(),
                Some(Ok(overview)) => overview_view(overview),
            }}
        </div>
    }
}

fn overview_view(overview: AttendanceOverview) -> View {
    if overview.records.is_empty() {
        return view! { <p class="no-records text-sm text-fg-muted">"No attendance records yet."</p> }
            .into_view();
    }
    view! {
        <AttendanceSummaryStats summary=overview.summary />
        <table class="attendance-table w-full text-sm">
            <thead>
                <tr>
                    <th class="text-left">"Date"</th>
                    <th class="text-left">"Status"</th>
                </tr>
            </thead>
            <tbody>
                {overview.records.into_iter().map(record_row).collect_view()}
            </tbody>
        </table>
    }
    .into_view()
}

fn record_row(record: AttendanceRecord) -> impl IntoView {
    view! {
        <tr>
            <td>{format_record_date(record.date)}</td>
            <td>
                <span class=status_badge_class(&record.status)>{record.status.clone()}</span>
            </td>
        </tr>
    }
}
