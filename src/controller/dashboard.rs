use crate::api::ApiRequest;
use crate::dashboard::Dashboard;
use crate::errors::DashboardResult;
use crate::services::{AdminService, execute};

/// Runs dashboard requests against a service as soon as they are produced.
///
/// The browser frontend does the same thing asynchronously over HTTP; this
/// synchronous driver is what the terminal demo and the tests use.
pub struct DashboardController<S: AdminService> {
    service: S,
    dashboard: Dashboard,
}

impl<S: AdminService> DashboardController<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            dashboard: Dashboard::new(),
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn dashboard_mut(&mut self) -> &mut Dashboard {
        &mut self.dashboard
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Issue the three initial reads. Each one succeeds or fails on its own.
    pub fn load(&mut self) -> [DashboardResult<()>; 3] {
        self.dashboard
            .load_requests()
            .map(|request| self.dispatch(request))
    }

    pub fn dispatch(&mut self, request: ApiRequest) -> DashboardResult<()> {
        let outcome = execute(&self.service, &request);
        self.dashboard.apply(&request, outcome)
    }

    pub fn submit_product(&mut self) -> DashboardResult<()> {
        let request = self.dashboard.submit_product()?;
        self.dispatch(request)
    }

    pub fn submit_user(&mut self) -> DashboardResult<()> {
        let request = self.dashboard.submit_user()?;
        self.dispatch(request)
    }

    pub fn confirm_delete(&mut self) -> DashboardResult<()> {
        let request = self.dashboard.confirm_delete()?;
        self.dispatch(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ApiError, DashboardError};
    use crate::services::InMemoryService;

    #[test]
    fn load_fills_collections() {
        let mut controller = DashboardController::new(InMemoryService::new_with_sample());
        assert!(controller.load().iter().all(Result::is_ok));
        assert_eq!(controller.dashboard().products().len(), 3);
        assert_eq!(controller.dashboard().users().len(), 2);
        assert_eq!(controller.dashboard().category_name("2"), Some("Shirts"));
    }

    #[test]
    fn one_failed_load_does_not_block_the_others() {
        let service = InMemoryService::new_with_sample();
        service.fail_next(ApiError::Network("offline".into()));
        let mut controller = DashboardController::new(service);
        let [products, users, categories] = controller.load();
        assert!(matches!(products, Err(DashboardError::Api(_))));
        assert!(users.is_ok() && categories.is_ok());
        assert!(controller.dashboard().products().is_empty());
        assert_eq!(controller.dashboard().users().len(), 2);
    }
}
