use crate::pages::employees::utils::list_heading;
use leptos::*;

#[component]
pub fn EmployeeSearch(search_term: RwSignal<String>, visible: Signal<usize>) -> impl IntoView {
    view! {
        <div class="list-header flex flex-col gap-3 md:flex-row md:items-center md:justify-between">
            <h2 class="text-xl font-semibold text-fg">{move || list_heading(visible.get())}</h2>
            <input
                type="text"
                class="search-input w-full md:w-72 rounded-md border border-border px-3 py-2 text-sm"
                placeholder="Search by name, ID, or email..."
                prop:value=move || search_term.get()
                on:input=move |ev| search_term.set(event_target_value(&ev))
            />
        </div>
    }
}
