use super::repository::{DashboardData, DashboardRepository};
use crate::api::{ApiClient, ApiError};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub dashboard_resource: Resource<(), Result<DashboardData, ApiError>>,
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repository = DashboardRepository::new_with_client(Rc::new(api));

    let dashboard_resource = create_resource(
        || (),
        move |_| {
            let repo = repository.clone();
            async move { repo.fetch_dashboard().await }
        },
    );

    DashboardViewModel { dashboard_resource }
}
