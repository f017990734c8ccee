use super::{components::form::EmployeeForm, view_model::use_add_employee_view_model};
use leptos::*;

#[component]
pub fn AddEmployeePage(on_success: Callback<()>) -> impl IntoView {
    let vm = use_add_employee_view_model(on_success);
    view! { <EmployeeForm vm=vm /> }
}
