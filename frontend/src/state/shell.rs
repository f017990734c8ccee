use crate::api::ApiClient;
use leptos::*;
use log::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    Dashboard,
    #[default]
    List,
    Add,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Dashboard, Tab::List, Tab::Add];

    pub fn key(self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::List => "list",
            Tab::Add => "add",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::List => "Employee List",
            Tab::Add => "Add Employee",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellState {
    pub active_tab: Tab,
    /// Bumped after a successful creation; list and dashboard rebuild on change.
    pub refresh_key: u32,
    pub connected: bool,
}

impl ShellState {
    pub fn select(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn employee_added(&mut self) {
        self.refresh_key = self.refresh_key.wrapping_add(1);
        self.active_tab = Tab::List;
    }
}

pub fn use_shell() -> RwSignal<ShellState> {
    match use_context::<RwSignal<ShellState>>() {
        Some(state) => state,
        None => {
            let state = create_rw_signal(ShellState::default());
            provide_context(state);
            state
        }
    }
}

/// Probes the backend root once; any failure leaves the flag false.
pub async fn probe_connection(api: &ApiClient, state: RwSignal<ShellState>) {
    let connected = match api.check_health().await {
        Ok(()) => true,
        Err(err) => {
            warn!("Backend not responding: {}", err);
            false
        }
    };
    state.update(|s| s.connected = connected);
}
