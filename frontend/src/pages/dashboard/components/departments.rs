use crate::pages::dashboard::utils::{format_employee_count, DepartmentCount};
use leptos::*;

#[component]
pub fn DepartmentGrid(departments: Vec<DepartmentCount>) -> impl IntoView {
    let content = if departments.is_empty() {
        view! { <p class="text-sm text-fg-muted">"No employees yet"</p> }.into_view()
    } else {
        view! {
            <div class="department-grid grid grid-cols-2 gap-4 md:grid-cols-3">
                {departments
                    .into_iter()
                    .map(|department| {
                        view! {
                            <div class="dept-card p-4 rounded-lg border border-border bg-surface-muted">
                                <h4 class="text-sm font-semibold text-fg">{department.name}</h4>
                                <p class="text-sm text-fg-muted">{format_employee_count(department.count)}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_view()
    };

    view! {
        <div class="departments-section space-y-3">
            <h3 class="text-base font-semibold text-fg">"Employees by Department"</h3>
            {content}
        </div>
    }
}
