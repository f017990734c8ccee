pub mod add_employee;
pub mod attendance;
pub mod dashboard;
pub mod employees;
