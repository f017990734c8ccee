pub mod departments;
pub mod summary;

pub use departments::DepartmentGrid;
pub use summary::TotalEmployeesCard;
