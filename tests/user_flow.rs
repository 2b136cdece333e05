use admin_dashboard::controller::dashboard::DashboardController;
use admin_dashboard::dashboard::{Page, PendingDelete};
use admin_dashboard::errors::{ApiError, DashboardError, ValidationError};
use admin_dashboard::models::Role;
use admin_dashboard::services::{AdminService, InMemoryService};

fn loaded() -> DashboardController<InMemoryService> {
    let mut controller = DashboardController::new(InMemoryService::new_with_sample());
    for result in controller.load() {
        result.unwrap();
    }
    controller.dashboard_mut().show_page(Page::Users);
    controller
}

#[test]
fn create_user_appends_with_next_id() {
    let mut controller = loaded();
    let dashboard = controller.dashboard_mut();
    dashboard.begin_create_user();
    let form = dashboard.user_form_mut().unwrap();
    assert_eq!(form.title(), "Create User");
    form.draft.set_full_name("Rita Rider");
    form.draft.set_email("rita@example.com");
    form.draft.set_password("hunter2");
    form.draft.set_phone_number("555-0199");
    form.draft.set_role(Role::Shipper);

    controller.submit_user().unwrap();

    let dashboard = controller.dashboard();
    assert!(dashboard.user_form().is_none());
    let created = dashboard.users().last().unwrap();
    assert_eq!(created.id.as_deref(), Some("3"));
    assert_eq!(created.role, Role::Shipper);
    assert_eq!(controller.service().list_users().unwrap().len(), 3);
}

#[test]
fn edit_user_changes_role_only_for_that_user() {
    let mut controller = loaded();
    let untouched = controller.dashboard().users()[0].clone();

    let dashboard = controller.dashboard_mut();
    dashboard.begin_edit_user("2").unwrap();
    let form = dashboard.user_form_mut().unwrap();
    assert_eq!(form.submit_label(), "Update User");
    assert_eq!(form.draft.full_name, "Sam Courier");
    form.draft.set_role(Role::Admin);

    controller.submit_user().unwrap();

    let users = controller.dashboard().users();
    assert_eq!(users[0], untouched);
    assert_eq!(users[1].role, Role::Admin);
    assert_eq!(users[1].id.as_deref(), Some("2"));
}

#[test]
fn incomplete_user_is_rejected_locally() {
    let mut controller = loaded();
    let calls_before = controller.service().call_count();
    let dashboard = controller.dashboard_mut();
    dashboard.begin_create_user();
    dashboard
        .user_form_mut()
        .unwrap()
        .draft
        .set_email("nobody@example.com");

    let err = controller.submit_user().unwrap_err();
    assert_eq!(
        err,
        DashboardError::Validation(ValidationError::MissingRequiredFields)
    );
    assert_eq!(controller.service().call_count(), calls_before);
}

#[test]
fn cancel_discards_draft() {
    let mut controller = loaded();
    let dashboard = controller.dashboard_mut();
    dashboard.begin_edit_user("1").unwrap();
    dashboard.user_form_mut().unwrap().draft.set_full_name("Changed");
    dashboard.cancel_user_form();
    assert!(dashboard.user_form().is_none());
    assert_eq!(dashboard.users()[0].full_name, "Store Admin");
}

#[test]
fn delete_user_after_confirmation() {
    let mut controller = loaded();
    controller.dashboard_mut().request_delete_user("1");
    assert_eq!(
        controller.dashboard().pending_delete(),
        Some(&PendingDelete::User("1".into()))
    );
    controller.confirm_delete().unwrap();
    let ids: Vec<_> = controller
        .dashboard()
        .users()
        .iter()
        .filter_map(|u| u.id.as_deref())
        .collect();
    assert_eq!(ids, vec!["2"]);
    assert!(controller.dashboard().pending_delete().is_none());
}

#[test]
fn failed_delete_keeps_the_user() {
    let mut controller = loaded();
    controller
        .service()
        .fail_next(ApiError::Status {
            status: 500,
            body: "database offline".into(),
        });

    controller.dashboard_mut().request_delete_user("2");
    let result = controller.confirm_delete();
    assert!(matches!(
        result,
        Err(DashboardError::Api(ApiError::Status { status: 500, .. }))
    ));

    let ids: Vec<_> = controller
        .dashboard()
        .users()
        .iter()
        .filter_map(|u| u.id.as_deref())
        .collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(controller.service().list_users().unwrap().len(), 2);
}
