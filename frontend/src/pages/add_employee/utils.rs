use crate::api::CreateEmployee;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormState {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeFormState {
    pub fn is_complete(&self) -> bool {
        [
            &self.employee_id,
            &self.full_name,
            &self.email,
            &self.department,
        ]
        .iter()
        .all(|value| !value.trim().is_empty())
    }

    /// `None` while any field is blank.
    pub fn to_request(&self) -> Option<CreateEmployee> {
        self.is_complete().then(|| CreateEmployee {
            employee_id: self.employee_id.clone(),
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            department: self.department.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
