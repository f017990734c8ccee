use super::utils::EmployeeFormState;
use crate::{
    api::{ApiClient, ApiError, CreateEmployee, Employee},
    pages::employees::repository::EmployeesRepository,
    utils::{
        messages::MessageState,
        time::{after, EMPLOYEE_CREATED_DELAY_MS},
    },
};
use leptos::*;
use std::rc::Rc;

pub const INCOMPLETE_FORM_MESSAGE: &str = "Please fill in all fields";

#[derive(Clone, Copy)]
pub struct AddEmployeeViewModel {
    pub form: RwSignal<EmployeeFormState>,
    pub messages: RwSignal<MessageState>,
    pub create_action: Action<CreateEmployee, Result<Employee, ApiError>>,
}

impl AddEmployeeViewModel {
    /// Dispatches only when every field is filled in.
    pub fn submit(&self) {
        self.messages.update(MessageState::clear);
        match self.form.get_untracked().to_request() {
            Some(payload) => self.create_action.dispatch(payload),
            None => self
                .messages
                .update(|state| state.set_error(INCOMPLETE_FORM_MESSAGE)),
        }
    }
}

pub fn use_add_employee_view_model(on_success: Callback<()>) -> AddEmployeeViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repository = EmployeesRepository::new_with_client(Rc::new(api));

    let form = create_rw_signal(EmployeeFormState::default());
    let messages = create_rw_signal(MessageState::default());

    let create_action = create_action(move |payload: &CreateEmployee| {
        let repo = repository.clone();
        let payload = payload.clone();
        async move { repo.create_employee(payload).await }
    });

    create_effect(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(_) => {
                    form.update(EmployeeFormState::reset);
                    messages.update(|state| state.set_success("Employee added successfully!"));
                    after(EMPLOYEE_CREATED_DELAY_MS, move || on_success.call(()));
                }
                Err(err) => {
                    messages.update(|state| state.set_error(err.detail_or("Error adding employee")));
                }
            }
        }
    });

    AddEmployeeViewModel {
        form,
        messages,
        create_action,
    }
}
