use admin_dashboard::controller::dashboard::DashboardController;
use admin_dashboard::dashboard::FormMode;
use admin_dashboard::errors::{ApiError, DashboardError, ValidationError};
use admin_dashboard::models::{Category, Product};
use admin_dashboard::services::{AdminService, InMemoryService};

fn product(id: &str, name: &str) -> Product {
    Product {
        id: Some(id.into()),
        name: name.into(),
        price: 10.0,
        active: true,
        category_id: "1".into(),
        ..Product::default()
    }
}

fn controller_with(ids: &[&str]) -> DashboardController<InMemoryService> {
    let products = ids
        .iter()
        .map(|id| product(id, &format!("product {id}")))
        .collect();
    let categories = vec![Category {
        id: Some("1".into()),
        name: "Shoes".into(),
    }];
    let service = InMemoryService::with_records(products, Vec::new(), categories);
    let mut controller = DashboardController::new(service);
    for result in controller.load() {
        result.unwrap();
    }
    controller
}

#[test]
fn valid_create_appends_exactly_one_record() {
    let mut controller = controller_with(&["1", "2"]);
    let dashboard = controller.dashboard_mut();
    dashboard.begin_create_product();
    let form = dashboard.product_form_mut().unwrap();
    form.draft.set_name("Sandal");
    form.draft.set_price_input("0");
    form.draft.set_category("1");
    form.draft.set_active(false);
    form.draft.add_size();
    form.draft.set_size(0, "38");

    controller.submit_product().unwrap();

    let dashboard = controller.dashboard();
    assert!(dashboard.product_form().is_none());
    let matching: Vec<_> = dashboard
        .products()
        .iter()
        .filter(|p| p.name == "Sandal")
        .collect();
    assert_eq!(matching.len(), 1);
    let created = matching[0];
    assert_eq!(created.id.as_deref(), Some("3"));
    assert_eq!(created.price, 0.0);
    assert!(!created.active);
    assert_eq!(created.sizes, vec!["38".to_string()]);
    assert_eq!(controller.service().list_products().unwrap().len(), 3);
}

#[test]
fn negative_price_never_reaches_the_backend() {
    let mut controller = controller_with(&["1"]);
    let calls_before = controller.service().call_count();

    let dashboard = controller.dashboard_mut();
    dashboard.begin_create_product();
    let form = dashboard.product_form_mut().unwrap();
    form.draft.set_name("Broken");
    form.draft.set_category("1");
    form.draft.set_price_input("-1");

    let err = controller.submit_product().unwrap_err();
    assert_eq!(err, DashboardError::Validation(ValidationError::NegativePrice));
    assert_eq!(controller.service().call_count(), calls_before);
    let form = controller.dashboard().product_form().unwrap();
    assert_eq!(form.error.as_deref(), Some("Price cannot be less than 0."));
    assert_eq!(controller.dashboard().products().len(), 1);
}

#[test]
fn missing_category_is_reported() {
    let mut controller = controller_with(&[]);
    let dashboard = controller.dashboard_mut();
    dashboard.begin_create_product();
    dashboard.product_form_mut().unwrap().draft.set_name("Orphan");

    let err = controller.submit_product().unwrap_err();
    assert_eq!(
        err,
        DashboardError::Validation(ValidationError::MissingRequiredFields)
    );
    assert_eq!(
        controller.dashboard().product_form().unwrap().error.as_deref(),
        Some("Please fill out all required fields.")
    );
}

#[test]
fn editing_three_replaces_only_three() {
    let mut controller = controller_with(&["1", "3", "5"]);
    let before = controller.dashboard().products().to_vec();

    let dashboard = controller.dashboard_mut();
    dashboard.begin_edit_product("3").unwrap();
    let form = dashboard.product_form_mut().unwrap();
    assert_eq!(form.mode, FormMode::Editing("3".into()));
    // same name as record 1 on purpose
    form.draft.set_name("product 1");
    form.draft.set_price(Some(99.0));

    controller.submit_product().unwrap();

    let after = controller.dashboard().products();
    assert_eq!(after.len(), 3);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
    assert_eq!(after[1].id.as_deref(), Some("3"));
    assert_eq!(after[1].name, "product 1");
    assert_eq!(after[1].price, 99.0);
}

#[test]
fn delete_five_then_delete_again() {
    let mut controller = controller_with(&["1", "3", "5"]);

    controller.dashboard_mut().request_delete_product("5");
    controller.confirm_delete().unwrap();
    let ids = |c: &DashboardController<InMemoryService>| {
        c.dashboard()
            .products()
            .iter()
            .filter_map(|p| p.id.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(ids(&controller), vec!["1", "3"]);

    controller.dashboard_mut().request_delete_product("5");
    let second = controller.confirm_delete();
    assert!(matches!(
        second,
        Err(DashboardError::Api(ApiError::NotFound(_)))
    ));
    assert_eq!(ids(&controller), vec!["1", "3"]);
}

#[test]
fn failed_delete_keeps_the_product() {
    let mut controller = controller_with(&["1", "3", "5"]);
    controller
        .service()
        .fail_next(ApiError::Network("connection reset".into()));

    controller.dashboard_mut().request_delete_product("5");
    let result = controller.confirm_delete();
    assert!(matches!(
        result,
        Err(DashboardError::Api(ApiError::Network(_)))
    ));

    let ids: Vec<_> = controller
        .dashboard()
        .products()
        .iter()
        .filter_map(|p| p.id.as_deref())
        .collect();
    assert_eq!(ids, vec!["1", "3", "5"]);
    assert_eq!(controller.service().list_products().unwrap().len(), 3);
    assert!(controller.dashboard().pending_delete().is_none());
}

#[test]
fn create_at_the_top_of_the_id_range_is_rejected() {
    let mut controller = controller_with(&["1", &u64::MAX.to_string()]);
    let calls = controller.service().call_count();
    let dashboard = controller.dashboard_mut();
    dashboard.begin_create_product();
    let form = dashboard.product_form_mut().unwrap();
    form.draft.set_name("Overflow");
    form.draft.set_category("1");

    let result = controller.submit_product();
    assert_eq!(
        result,
        Err(DashboardError::Validation(
            ValidationError::IdentifiersExhausted
        ))
    );
    assert_eq!(controller.service().call_count(), calls);
    let form = controller.dashboard().product_form().unwrap();
    assert_eq!(
        form.error.as_deref(),
        Some("No identifier is left for a new record.")
    );
    assert_eq!(controller.dashboard().products().len(), 2);
}

#[test]
fn next_identifier_after_sparse_ids() {
    let mut controller = controller_with(&["2", "7", "9"]);
    let dashboard = controller.dashboard_mut();
    dashboard.begin_create_product();
    let form = dashboard.product_form_mut().unwrap();
    form.draft.set_name("Tenth");
    form.draft.set_category("1");
    controller.submit_product().unwrap();

    let last = controller.dashboard().products().last().unwrap();
    assert_eq!(last.id.as_deref(), Some("10"));
}

#[test]
fn failed_create_keeps_form_and_collection() {
    let mut controller = controller_with(&["1"]);
    let dashboard = controller.dashboard_mut();
    dashboard.begin_create_product();
    let form = dashboard.product_form_mut().unwrap();
    form.draft.set_name("Offline");
    form.draft.set_category("1");
    controller
        .service()
        .fail_next(ApiError::Network("connection reset".into()));

    let err = controller.submit_product().unwrap_err();
    assert!(matches!(err, DashboardError::Api(ApiError::Network(_))));
    let dashboard = controller.dashboard();
    assert_eq!(dashboard.products().len(), 1);
    let form = dashboard.product_form().unwrap();
    assert_eq!(form.draft.name, "Offline");
    assert_eq!(form.error, None);
}

#[test]
fn image_edits_follow_sequence_rules() {
    let mut controller = controller_with(&["1"]);
    let dashboard = controller.dashboard_mut();
    dashboard.begin_create_product();
    let draft = &mut dashboard.product_form_mut().unwrap().draft;
    draft.add_image();
    draft.set_image_name(0, "front.png");
    draft.add_image();
    draft.set_image_name(1, "side.png");
    draft.add_image();
    assert_eq!(draft.images.len(), 3);
    assert_eq!(draft.images[2].name, "");

    draft.set_image_name(2, "back.png");
    draft.remove_image(1);
    let names: Vec<_> = draft.images.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["front.png", "back.png"]);
}
