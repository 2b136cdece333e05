use admin_dashboard::{
    config::DashboardConfig,
    controller::dashboard::DashboardController,
    dashboard::Page,
    logging::init_tracing,
    services::{AdminService, InMemoryService},
};
use dotenvy::dotenv;
use tracing::info;

fn main() {
    dotenv().ok();
    init_tracing();

    let config = DashboardConfig::from_env();
    let service = if config.seed_sample {
        InMemoryService::new_with_sample()
    } else {
        InMemoryService::empty()
    };
    let mut controller = DashboardController::new(service);

    for result in controller.load() {
        if let Err(error) = result {
            eprintln!("load -> {error}");
        }
    }
    print_products(&controller);

    let dashboard = controller.dashboard_mut();
    dashboard.begin_create_product();
    if let Some(form) = dashboard.product_form_mut() {
        form.draft.set_name("Rain Jacket");
        form.draft.set_price_input("129.90");
        form.draft.set_category("2");
        form.draft.add_size();
        form.draft.set_size(0, "M");
        form.draft.add_image();
        form.draft
            .set_image_name(0, "https://cdn.example.com/rain-jacket.png");
    }
    if let Err(error) = controller.submit_product() {
        eprintln!("create product -> {error}");
    }

    let first_id = controller
        .dashboard()
        .products()
        .first()
        .and_then(|product| product.id.clone());
    if let Some(id) = first_id {
        let dashboard = controller.dashboard_mut();
        match dashboard.begin_edit_product(&id) {
            Ok(()) => {
                if let Some(form) = dashboard.product_form_mut() {
                    form.draft.set_price(Some(-1.0));
                }
                if let Err(error) = controller.submit_product() {
                    eprintln!("update product -> {error}");
                }
                controller.dashboard_mut().cancel_product_form();
            }
            Err(error) => eprintln!("edit product -> {error}"),
        }

        controller.dashboard_mut().request_delete_product(id);
        if let Err(error) = controller.confirm_delete() {
            eprintln!("delete product -> {error}");
        }
    }
    print_products(&controller);

    controller.dashboard_mut().show_page(Page::Users);
    print_users(&controller);
    info!(
        calls = controller.service().call_count(),
        "demo finished"
    );
}

fn print_products<S: AdminService>(controller: &DashboardController<S>) {
    let dashboard = controller.dashboard();
    println!("{:<4} {:<20} {:>8} {:<12} Status", "ID", "Name", "Price", "Category");
    for product in dashboard.products() {
        let category = dashboard
            .category_name(&product.category_id)
            .unwrap_or(&product.category_id);
        println!(
            "{:<4} {:<20} {:>8.2} {:<12} {}",
            product.id.as_deref().unwrap_or("-"),
            product.name,
            product.price,
            category,
            if product.active { "Active" } else { "Inactive" }
        );
    }
    println!();
}

fn print_users<S: AdminService>(controller: &DashboardController<S>) {
    println!("{:<4} {:<20} {:<24} {:<8}", "ID", "Full Name", "Email", "Role");
    for user in controller.dashboard().users() {
        println!(
            "{:<4} {:<20} {:<24} {:<8}",
            user.id.as_deref().unwrap_or("-"),
            user.full_name,
            user.email,
            user.role.as_str()
        );
    }
}
