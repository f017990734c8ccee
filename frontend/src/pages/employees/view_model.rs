use super::{
    repository::{DeleteOutcome, EmployeesRepository},
    utils::{filter_employees, resolve_delete, toggle_expanded},
};
use crate::{
    api::{ApiClient, ApiError, Employee},
    utils::dialog::alert,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub employees_resource: Resource<(), Result<Vec<Employee>, ApiError>>,
    pub search_term: RwSignal<String>,
    pub expanded_id: RwSignal<Option<i64>>,
    pub pending_delete: RwSignal<Option<Employee>>,
    pub delete_action: Action<i64, DeleteOutcome>,
}

impl EmployeesViewModel {
    /// Loaded employees narrowed by the current search term, backend order kept.
    pub fn filtered(&self) -> Vec<Employee> {
        let term = self.search_term.get();
        self.employees_resource
            .get()
            .and_then(|result| result.ok())
            .map(|employees| filter_employees(&employees, &term))
            .unwrap_or_default()
    }

    pub fn toggle(&self, id: i64) {
        self.expanded_id.update(|current| *current = toggle_expanded(*current, id));
    }

    pub fn request_delete(&self, employee: Employee) {
        self.pending_delete.set(Some(employee));
    }

    pub fn cancel_delete(&self) {
        self.answer_delete(false);
    }

    pub fn confirm_delete(&self) {
        self.answer_delete(true);
    }

    fn answer_delete(&self, confirmed: bool) {
        let pending = self.pending_delete.get_untracked();
        self.pending_delete.set(None);
        if let Some(id) = resolve_delete(pending.as_ref(), confirmed) {
            self.delete_action.dispatch(id);
        }
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repository = EmployeesRepository::new_with_client(Rc::new(api));

    let repo_for_resource = repository.clone();
    let employees_resource = create_resource(
        || (),
        move |_| {
            let repo = repo_for_resource.clone();
            async move { repo.fetch_employees().await }
        },
    );

    let repo_for_delete = repository.clone();
    let delete_action = create_action(move |id: &i64| {
        let repo = repo_for_delete.clone();
        let id = *id;
        async move { repo.delete_and_refetch(id).await }
    });

    create_effect(move |_| {
        if let Some(outcome) = delete_action.value().get() {
            employees_resource.set(outcome.refreshed);
            if let Some(err) = outcome.error {
                alert(&err.detail_or("Error deleting employee"));
            }
        }
    });

    EmployeesViewModel {
        employees_resource,
        search_term: create_rw_signal(String::new()),
        expanded_id: create_rw_signal(None),
        pending_delete: create_rw_signal(None),
        delete_action,
    }
}
