use super::{
    components::{DepartmentGrid, TotalEmployeesCard},
    repository::DashboardData,
    view_model::use_dashboard_view_model,
};
use crate::components::layout::{ErrorMessage, LoadingSpinner};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let resource = vm.dashboard_resource;

    view! {
        <div class="dashboard-container space-y-6">
            {move || match resource.get() {
                None => view! { <LoadingSpinner label="Loading dashboard..." /> }.into_view(),
                Some(Err(_)) => failed_view(),
                Some(Ok(data)) => loaded_view(data),
            }}
        </div>
    }
}

fn loaded_view(data: DashboardData) -> View {
    view! {
        <TotalEmployeesCard total=data.total_employees />
        <DepartmentGrid departments=data.departments />
    }
    .into_view()
}

fn failed_view() -> View {
    view! {
        <TotalEmployeesCard total=0 />
        <ErrorMessage message="Error loading dashboard data" />
        <DepartmentGrid departments=Vec::new() />
    }
    .into_view()
}
