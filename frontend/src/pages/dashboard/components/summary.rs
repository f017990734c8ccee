use leptos::*;

#[component]
pub fn TotalEmployeesCard(total: usize) -> impl IntoView {
    view! {
        <div class="dashboard-cards grid grid-cols-1 gap-4 lg:grid-cols-3">
            <div class="dashboard-card p-6 rounded-2xl bg-surface-elevated border border-border shadow-sm">
                <h3 class="text-xs font-bold uppercase tracking-widest text-fg-muted">"Total Employees"</h3>
                <p class="stat-number mt-3 text-3xl font-extrabold text-fg">{total}</p>
            </div>
        </div>
    }
}
