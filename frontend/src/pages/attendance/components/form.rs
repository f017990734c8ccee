use crate::{
    api::AttendanceStatus,
    components::layout::{ErrorMessage, SuccessMessage},
    pages::attendance::view_model::use_attendance_form_view_model,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn AttendanceForm(employee_id: i64) -> impl IntoView {
    let vm = use_attendance_form_view_model(employee_id);
    let date = vm.form.date_signal();
    let status = vm.form.status_signal();
    let pending = vm.mark_action.pending();
    let success = Signal::derive(move || vm.messages.get().success);
    let error = Signal::derive(move || vm.messages.get().error);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <form class="attendance-form space-y-3" on:submit=on_submit>
            <h4 class="text-sm font-semibold text-fg">"Mark Attendance"</h4>
            <Show when=move || error.get().is_some()>
                <ErrorMessage message=error.get().unwrap_or_default() />
            </Show>
            <Show when=move || success.get().is_some()>
                <SuccessMessage message=success.get().unwrap_or_default() />
            </Show>
            <div class="form-group">
                <label class="block text-sm text-fg-muted">"Date"</label>
                <input
                    type="date"
                    class="w-full rounded-md border border-border px-3 py-2 text-sm"
                    required
                    prop:value=move || date.get()
                    on:input=move |ev| date.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label class="block text-sm text-fg-muted">"Status"</label>
                <select
                    class="w-full rounded-md border border-border px-3 py-2 text-sm"
                    prop:value=move || status.get().as_str()
                    on:change=move |ev| vm.form.set_status_from_input(&event_target_value(&ev))
                >
                    {AttendanceStatus::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <option value=option.as_str() selected=move || status.get() == option>
                                    {option.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <button
                type="submit"
                class="btn-primary rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                disabled=move || pending.get()
            >
                {move || if pending.get() { "Marking..." } else { "Mark Attendance" }}
            </button>
        </form>
    }
}
