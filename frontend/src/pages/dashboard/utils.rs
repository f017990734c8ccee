use crate::api::Employee;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentCount {
    pub name: String,
    pub count: usize,
}

/// One bucket per exact department string, in first-seen order.
pub fn department_breakdown(employees: &[Employee]) -> Vec<DepartmentCount> {
    let mut buckets: Vec<DepartmentCount> = Vec::new();
    for employee in employees {
        match buckets
            .iter_mut()
            .find(|bucket| bucket.name == employee.department)
        {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(DepartmentCount {
                name: employee.department.clone(),
                count: 1,
            }),
        }
    }
    buckets
}

pub fn format_employee_count(count: usize) -> String {
    if count == 1 {
        "1 employee".to_string()
    } else {
        format!("{} employees", count)
    }
}
