use crate::{
    api::Department,
    components::layout::{ErrorMessage, SuccessMessage},
    pages::add_employee::{utils::EmployeeFormState, view_model::AddEmployeeViewModel},
};
use leptos::{ev, *};

#[component]
fn TextField(
    form: RwSignal<EmployeeFormState>,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    read: fn(&EmployeeFormState) -> String,
    write: fn(&mut EmployeeFormState, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id class="block text-sm font-medium text-fg">{label}</label>
            <input
                id=id
                name=id
                type=input_type
                class="mt-1 w-full rounded-md border border-border px-3 py-2 text-sm"
                required
                placeholder=placeholder
                prop:value=move || form.with(read)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|state| write(state, value));
                }
            />
        </div>
    }
}

#[component]
pub fn EmployeeForm(vm: AddEmployeeViewModel) -> impl IntoView {
    let form = vm.form;
    let messages = vm.messages;
    let pending = vm.create_action.pending();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="form-container bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h2 class="text-lg font-semibold text-fg">"Add New Employee"</h2>

            <Show when=move || messages.get().error.is_some()>
                <ErrorMessage message={messages.get().error.unwrap_or_default()} />
            </Show>
            <Show when=move || messages.get().success.is_some()>
                <SuccessMessage message={messages.get().success.unwrap_or_default()} />
            </Show>

            <form class="space-y-4" on:submit=on_submit>
                <TextField
                    form=form
                    id="employee_id"
                    label="Employee ID *"
                    input_type="text"
                    placeholder="e.g., EMP001"
                    read=|state| state.employee_id.clone()
                    write=|state, value| state.employee_id = value
                />
                <TextField
                    form=form
                    id="full_name"
                    label="Full Name *"
                    input_type="text"
                    placeholder="John Doe"
                    read=|state| state.full_name.clone()
                    write=|state, value| state.full_name = value
                />
                <TextField
                    form=form
                    id="email"
                    label="Email *"
                    input_type="email"
                    placeholder="john@example.com"
                    read=|state| state.email.clone()
                    write=|state, value| state.email = value
                />
                <div class="form-group">
                    <label for="department" class="block text-sm font-medium text-fg">"Department *"</label>
                    <select
                        id="department"
                        name="department"
                        class="mt-1 w-full rounded-md border border-border px-3 py-2 text-sm"
                        required
                        prop:value=move || form.with(|state| state.department.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|state| state.department = value);
                        }
                    >
                        <option value="">"Select Department"</option>
                        {Department::ALL
                            .into_iter()
                            .map(|department| {
                                let value = department.as_str();
                                view! {
                                    <option
                                        value=value
                                        selected=move || form.with(|state| state.department == value)
                                    >
                                        {value}
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
                    {move || if pending.get() { "Adding..." } else { "Add Employee" }}
                </button>
            </form>
        </div>
    }
}
