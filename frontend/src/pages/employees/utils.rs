use crate::api::Employee;

/// Case-insensitive substring match on name, business id, or email.
pub fn matches_search(employee: &Employee, term: &str) -> bool {
    let needle = term.to_lowercase();
    employee.full_name.to_lowercase().contains(&needle)
        || employee.employee_id.to_lowercase().contains(&needle)
        || employee.email.to_lowercase().contains(&needle)
}

pub fn filter_employees(employees: &[Employee], term: &str) -> Vec<Employee> {
    employees
        .iter()
        .filter(|employee| matches_search(employee, term))
        .cloned()
        .collect()
}

/// At most one record is expanded; selecting the open one closes it.
pub fn toggle_expanded(current: Option<i64>, id: i64) -> Option<i64> {
    if current == Some(id) {
        None
    } else {
        Some(id)
    }
}

/// The id to delete once the operator has answered the confirmation, if any.
pub fn resolve_delete(pending: Option<&Employee>, confirmed: bool) -> Option<i64> {
    pending.filter(|_| confirmed).map(|employee| employee.id)
}

pub fn list_heading(visible: usize) -> String {
    format!("Employees ({})", visible)
}
