use crate::api::{test_support::mock::MockServer, ApiClient};
use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Renders a view on the host with resource loading suppressed, so only the
/// pending (loading) branch of every resource shows up.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Puts an `ApiClient` pointed at `server` into context for the views under test.
pub fn provide_mock_client(server: &MockServer) -> ApiClient {
    let client = ApiClient::new_with_base_url(server.url("/api"));
    provide_context(client.clone());
    client
}
