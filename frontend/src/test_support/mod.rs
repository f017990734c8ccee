#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::Employee;

    pub fn employee(id: i64, employee_id: &str, full_name: &str, email: &str, department: &str) -> Employee {
        Employee {
            id,
            employee_id: employee_id.into(),
            full_name: full_name.into(),
            email: email.into(),
            department: department.into(),
        }
    }

    /// The three-person roster used across view tests.
    pub fn sample_roster() -> Vec<Employee> {
        vec![
            employee(1, "EMP001", "Asha Rao", "a@x.com", "IT"),
            employee(2, "EMP002", "Bo Lin", "b@x.com", "IT"),
            employee(3, "EMP003", "Cy Park", "c@x.com", "HR"),
        ]
    }

    pub fn roster_json() -> serde_json::Value {
        serde_json::to_value(sample_roster()).unwrap_or_default()
    }
}
