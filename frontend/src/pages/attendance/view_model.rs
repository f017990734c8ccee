use super::{
    repository::{AttendanceOverview, AttendanceRepository},
    utils::AttendanceFormState,
};
use crate::{
    api::{ApiClient, ApiError, AttendanceRecord, CreateAttendance},
    utils::{
        messages::MessageState,
        time::{after, ATTENDANCE_MARKED_DELAY_MS},
    },
};
use leptos::*;
use std::rc::Rc;

fn repository() -> AttendanceRepository {
    let api = use_context::<ApiClient>().unwrap_or_default();
    AttendanceRepository::new_with_client(Rc::new(api))
}

#[derive(Clone, Copy)]
pub struct AttendanceFormViewModel {
    pub form: AttendanceFormState,
    pub messages: RwSignal<MessageState>,
    pub mark_action: Action<CreateAttendance, Result<AttendanceRecord, ApiError>>,
}

impl AttendanceFormViewModel {
    /// Validates locally; only a complete form is dispatched.
    pub fn submit(&self) {
        self.messages.update(|state| state.clear());
        match self.form.to_request() {
            Ok(payload) => self.mark_action.dispatch(payload),
            Err(err) => self.messages.update(|state| state.set_error(err)),
        }
    }
}

pub fn use_attendance_form_view_model(employee_id: i64) -> AttendanceFormViewModel {
    let repository = repository();
    let form = AttendanceFormState::new();
    let messages = create_rw_signal(MessageState::default());

    let mark_action = create_action(move |payload: &CreateAttendance| {
        let repo = repository.clone();
        let payload = payload.clone();
        async move { repo.mark_attendance(employee_id, payload).await }
    });

    create_effect(move |_| {
        if let Some(result) = mark_action.value().get() {
            match result {
                Ok(_) => {
                    messages.update(|state| state.set_success("Attendance marked!"));
                    form.reset();
                    after(ATTENDANCE_MARKED_DELAY_MS, move || {
                        messages.update(|state| state.clear_success());
                    });
                }
                Err(err) => {
                    messages.update(|state| state.set_error(err.detail_or("Error marking attendance")));
                }
            }
        }
    });

    AttendanceFormViewModel {
        form,
        messages,
        mark_action,
    }
}

#[derive(Clone, Copy)]
pub struct AttendanceListViewModel {
    pub reload: RwSignal<u32>,
    pub overview_resource: Resource<u32, Result<AttendanceOverview, ApiError>>,
}

impl AttendanceListViewModel {
    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

pub fn use_attendance_list_view_model(employee_id: i64) -> AttendanceListViewModel {
    let repository = repository();
    let reload = create_rw_signal(0u32);
    let overview_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repository.clone();
            async move { repo.fetch_overview(employee_id).await }
        },
    );

    AttendanceListViewModel {
        reload,
        overview_resource,
    }
}
