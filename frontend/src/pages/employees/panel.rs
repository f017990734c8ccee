use super::{
    components::{card::EmployeeCard, search::EmployeeSearch},
    view_model::{use_employees_view_model, EmployeesViewModel},
};
use crate::{
    api::Employee,
    components::{
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
};
use leptos::*;

#[component]
pub fn EmployeeListPage() -> impl IntoView {
    let vm = use_employees_view_model();
    view! { <EmployeeDirectory vm=vm /> }
}

#[component]
pub fn EmployeeDirectory(vm: EmployeesViewModel) -> impl IntoView {
    let resource = vm.employees_resource;

    let loaded = Signal::derive(move || resource.get());
    let total = Signal::derive(move || {
        loaded
            .get()
            .and_then(|result| result.ok())
            .map(|employees| employees.len())
            .unwrap_or(0)
    });
    let visible = Signal::derive(move || vm.filtered());
    let visible_count = Signal::derive(move || visible.get().len());
    let has_matches = move || visible_count.get() > 0;
    let dialog_open = Signal::derive(move || vm.pending_delete.get().is_some());

    let on_toggle = Callback::new(move |id: i64| vm.toggle(id));
    let on_delete = Callback::new(move |employee: Employee| vm.request_delete(employee));

    view! {
        <div class="employee-list space-y-4">
            {move || match loaded.get() {
                None => view! { <LoadingSpinner label="Loading employees..." /> }.into_view(),
                Some(Err(_)) => view! { <ErrorMessage message="Error fetching employees" /> }.into_view(),
                Some(Ok(_)) if total.get() == 0 => view! {
                    <EmptyState title="No employees found. Add one to get started!" />
                }
                .into_view(),
                Some(Ok(_)) => view! {
                    <EmployeeSearch search_term=vm.search_term visible=visible_count />
                    <Show
                        when=has_matches
                        fallback=|| view! { <p class="no-results text-sm text-fg-muted">"No employees match your search"</p> }
                    >
                        <div class="employees-grid space-y-3">
                            <For
                                each=move || visible.get()
                                key=|employee| employee.id
                                children=move |employee: Employee| {
                                    let id = employee.id;
                                    let expanded = Signal::derive(move || vm.expanded_id.get() == Some(id));
                                    view! {
                                        <EmployeeCard
                                            employee=employee
                                            expanded=expanded
                                            on_toggle=on_toggle
                                            on_delete=on_delete
                                        />
                                    }
                                }
                            />
                        </div>
                    </Show>
                }
                .into_view(),
            }}
            <ConfirmDialog
                is_open=dialog_open
                title="Delete employee"
                message="Are you sure you want to delete this employee?"
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
                confirm_label="Delete"
                destructive=true
            />
        </div>
    }
}
