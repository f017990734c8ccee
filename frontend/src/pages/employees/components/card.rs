use crate::{
    api::Employee,
    pages::attendance::components::{form::AttendanceForm, list::AttendanceList},
};
use leptos::{ev::MouseEvent, *};

#[component]
pub fn EmployeeCard(
    employee: Employee,
    expanded: Signal<bool>,
    on_toggle: Callback<i64>,
    on_delete: Callback<Employee>,
) -> impl IntoView {
    let id = employee.id;
    let for_delete = employee.clone();
    let email = employee.email.clone();
    let department = employee.department.clone();

    view! {
        <div class="employee-card border border-border rounded-lg bg-surface-elevated shadow-sm">
            <div
                class="employee-header flex items-center justify-between gap-3 p-4 cursor-pointer"
                on:click=move |_| on_toggle.call(id)
            >
                <div class="employee-info">
                    <h3 class="text-base font-semibold text-fg">{employee.full_name.clone()}</h3>
                    <p class="employee-id text-sm text-fg-muted">
                        "ID: "
                        <strong>{employee.employee_id.clone()}</strong>
                        {format!(" | {}", employee.department)}
                    </p>
                </div>
                <div class="employee-actions flex items-center gap-3">
                    <span class="expand-icon text-fg-muted">
                        {move || if expanded.get() { "▼" } else { "▶" }}
                    </span>
                    <button
                        type="button"
                        class="btn-delete rounded-md px-3 py-1 text-sm font-semibold bg-action-danger-bg text-action-danger-text"
                        on:click=move |ev: MouseEvent| {
                            ev.stop_propagation();
                            on_delete.call(for_delete.clone());
                        }
                    >
                        "Delete"
                    </button>
                </div>
            </div>
            <Show when=move || expanded.get()>
                <div class="employee-details border-t border-border p-4 space-y-4">
                    <div class="detail-row text-sm">
                        <span class="label font-medium">"Email:"</span>
                        " "
                        <span>{email.clone()}</span>
                    </div>
                    <div class="detail-row text-sm">
                        <span class="label font-medium">"Department:"</span>
                        " "
                        <span>{department.clone()}</span>
                    </div>
                    <div class="attendance-section grid gap-4 md:grid-cols-2">
                        <AttendanceForm employee_id=id />
                        <AttendanceList employee_id=id />
                    </div>
                </div>
            </Show>
        </div>
    }
}
