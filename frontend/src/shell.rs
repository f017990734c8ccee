use leptos::*;
use leptos_meta::{provide_meta_context, Title};

use crate::{
    api::ApiClient,
    components::layout::Layout,
    config::AppConfig,
    pages::{add_employee::AddEmployeePage, dashboard::DashboardPage, employees::EmployeeListPage},
    state::shell::{probe_connection, use_shell, ShellState, Tab},
};

pub fn mount_app(config: AppConfig) {
    mount_to_body(move || app_root(config));
}

pub fn app_root(config: AppConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new(&config));
    view! {
        <Title text="HRMS Lite"/>
        <Shell/>
    }
}

fn nav_class(active: bool) -> &'static str {
    if active {
        "nav-btn active px-4 py-2 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text"
    } else {
        "nav-btn px-4 py-2 rounded-md text-sm font-semibold text-fg hover:bg-surface-muted"
    }
}

#[component]
pub fn Shell() -> impl IntoView {
    let shell = use_shell();
    let api = use_context::<ApiClient>().unwrap_or_default();

    create_effect(move |_| {
        let api = api.clone();
        wasm_bindgen_futures::spawn_local(async move { probe_connection(&api, shell).await });
    });

    // Views rebuild only when the tab or the refresh counter changes.
    let active_tab = create_memo(move |_| shell.with(|state| state.active_tab));
    let refresh_key = create_memo(move |_| shell.with(|state| state.refresh_key));
    let connected = create_memo(move |_| shell.with(|state| state.connected));

    let on_employee_added = Callback::new(move |_| shell.update(ShellState::employee_added));

    view! {
        <Layout>
            <header class="app-header px-6 py-6 bg-surface-elevated border-b border-border">
                <h1 class="text-2xl font-bold text-fg">"HRMS Lite"</h1>
                <p class="text-sm text-fg-muted">"Human Resource Management System"</p>
                <Show when=move || connected.get()>
                    <span class="api-status text-xs font-semibold text-status-success-text">"✓ Connected"</span>
                </Show>
            </header>
            <nav class="app-nav flex gap-2 px-6 py-3">
                {Tab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                type="button"
                                id=tab.key()
                                class=move || nav_class(active_tab.get() == tab)
                                on:click=move |_| shell.update(|state| state.select(tab))
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <main class="app-main px-6 py-6">
                {move || {
                    refresh_key.track();
                    match active_tab.get() {
                        Tab::Dashboard => view! { <DashboardPage/> }.into_view(),
                        Tab::List => view! { <EmployeeListPage/> }.into_view(),
                        Tab::Add => view! { <AddEmployeePage on_success=on_employee_added/> }.into_view(),
                    }
                }}
            </main>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::MockServer;
    use crate::test_support::ssr::{provide_mock_client, render_to_string};

    #[test]
    fn renders_header_navigation_and_default_tab() {
        let server = MockServer::start();
        let html = render_to_string(move || {
            provide_mock_client(&server);
            view! { <Shell/> }
        });
        assert!(html.contains("HRMS Lite"));
        assert!(html.contains("Human Resource Management System"));
        assert!(html.contains("Employee List"));
        assert!(html.contains("Add Employee"));
        assert!(html.contains("Loading employees..."));
        assert!(!html.contains("✓ Connected"));
        assert!(html.contains("All rights reserved."));
    }

    #[test]
    fn selected_tab_drives_content() {
        let server = MockServer::start();
        let html = render_to_string(move || {
            provide_mock_client(&server);
            use_shell().update(|state| state.select(Tab::Add));
            view! { <Shell/> }
        });
        assert!(html.contains("Add New Employee"));
        assert!(!html.contains("Loading employees..."));
    }

    #[test]
    fn connected_flag_shows_badge() {
        let server = MockServer::start();
        let html = render_to_string(move || {
            provide_mock_client(&server);
            use_shell().update(|state| {
                state.connected = true;
                state.select(Tab::Dashboard);
            });
            view! { <Shell/> }
        });
        assert!(html.contains("✓ Connected"));
        assert!(html.contains("Loading dashboard..."));
    }
}
