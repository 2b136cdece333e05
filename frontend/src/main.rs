use admin_dashboard::api::{ApiRequest, ApiResponse, DEFAULT_API_BASE, HttpMethod};
use admin_dashboard::collection::find_by_id;
use admin_dashboard::dashboard::{Dashboard, Page, ProductDraft, UserDraft};
use admin_dashboard::errors::{ApiError, ApiResult};
use admin_dashboard::models::Role;
use dioxus::prelude::*;
use reqwasm::http::Request;
use tracing::{debug, warn};

const API_BASE: &str = match option_env!("ADMIN_API_BASE") {
    Some(base) => base,
    None => DEFAULT_API_BASE,
};

fn main() {
    launch(App);
}

// ---------- Transport ----------
async fn send(base: &str, request: &ApiRequest) -> ApiResult<ApiResponse> {
    let url = request.url(base);
    let mut req = match request.method() {
        HttpMethod::Get => Request::get(&url),
        HttpMethod::Post => Request::post(&url),
        HttpMethod::Put => Request::put(&url),
        HttpMethod::Delete => Request::delete(&url),
    };
    if let Some(body) = request.body()? {
        req = req.header("Content-Type", "application/json").body(body);
    }
    let resp = req
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let text = resp
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status { status, body: text });
    }
    request.decode(&text)
}

/// Run `request` in the background and fold the outcome into the dashboard.
fn dispatch(mut dashboard: Signal<Dashboard>, request: ApiRequest) {
    spawn(async move {
        let outcome = send(API_BASE, &request).await;
        if let Err(err) = dashboard.write().apply(&request, outcome) {
            debug!(error = %err, "dashboard left unchanged");
        }
    });
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn confirm_and_delete(mut dashboard: Signal<Dashboard>) {
    let prompt = match dashboard.read().pending_delete() {
        Some(pending) => pending.prompt(),
        None => return,
    };
    if !confirm(prompt) {
        dashboard.write().cancel_delete();
        return;
    }
    let result = dashboard.write().confirm_delete();
    match result {
        Ok(request) => dispatch(dashboard, request),
        Err(err) => warn!(error = %err, "delete not dispatched"),
    }
}

fn edit_product(mut dashboard: Signal<Dashboard>, edit: impl FnOnce(&mut ProductDraft)) {
    if let Some(form) = dashboard.write().product_form_mut() {
        edit(&mut form.draft);
    }
}

fn edit_user(mut dashboard: Signal<Dashboard>, edit: impl FnOnce(&mut UserDraft)) {
    if let Some(form) = dashboard.write().user_form_mut() {
        edit(&mut form.draft);
    }
}

fn submit_product(mut dashboard: Signal<Dashboard>) {
    let result = dashboard.write().submit_product();
    // a rejected draft already carries its message
    if let Ok(request) = result {
        dispatch(dashboard, request);
    }
}

fn submit_user(mut dashboard: Signal<Dashboard>) {
    let result = dashboard.write().submit_user();
    if let Ok(request) = result {
        dispatch(dashboard, request);
    }
}

// ---------- App ----------
fn App() -> Element {
    let dashboard = use_signal(Dashboard::new);
    use_hook(move || {
        let requests = dashboard.peek().load_requests();
        for request in requests {
            dispatch(dashboard, request);
        }
    });

    let page = dashboard.read().page();

    rsx! {
        style { {STYLE} }
        div { class: "dashboard-container",
            Sidebar { dashboard }
            div { class: "main-content",
                {match page {
                    Page::Products => rsx! { ProductsPage { dashboard } },
                    Page::Users => rsx! { UsersPage { dashboard } },
                }}
            }
        }
        ProductModal { dashboard }
        UserModal { dashboard }
    }
}

#[component]
fn Sidebar(mut dashboard: Signal<Dashboard>) -> Element {
    let page = dashboard.read().page();
    rsx! {
        div { class: "sidebar",
            div { class: "sidebar-header", h3 { "Dashboard" } }
            ul { class: "sidebar-menu",
                li {
                    class: if page == Page::Products { "active" } else { "" },
                    onclick: move |_| dashboard.write().show_page(Page::Products),
                    "Manage Products"
                }
                li {
                    class: if page == Page::Users { "active" } else { "" },
                    onclick: move |_| dashboard.write().show_page(Page::Users),
                    "Manage Users"
                }
            }
        }
    }
}

#[component]
fn ProductsPage(mut dashboard: Signal<Dashboard>) -> Element {
    let products = dashboard.read().products().to_vec();
    let categories = dashboard.read().categories().to_vec();
    rsx! {
        div { id: "products",
            h2 { "Manage Products" }
            button { class: "btn-custom", onclick: move |_| dashboard.write().begin_create_product(), "Create Product" }
            table { class: "table",
                thead {
                    tr { th { "ID" } th { "Name" } th { "Price" } th { "Category" } th { "Status" } th { "Actions" } }
                }
                tbody {
                    { products.into_iter().map(|product| {
                        let id = product.id.clone().unwrap_or_default();
                        let edit_id = id.clone();
                        let delete_id = id.clone();
                        let category = find_by_id(&categories, &product.category_id)
                            .map_or(product.category_id.clone(), |category| category.name.clone());
                        let status = if product.active { "Active" } else { "Inactive" };
                        rsx! {
                            tr { key: "{id}",
                                td { "{id}" }
                                td { "{product.name}" }
                                td { "{product.price}" }
                                td { "{category}" }
                                td { "{status}" }
                                td { class: "table-actions",
                                    button { class: "btn-custom", onclick: move |_| {
                                        if let Err(err) = dashboard.write().begin_edit_product(&edit_id) { warn!(error = %err, "cannot edit product"); }
                                    }, "Edit" }
                                    button { class: "btn-custom btn-danger", onclick: move |_| {
                                        dashboard.write().request_delete_product(delete_id.clone());
                                        confirm_and_delete(dashboard);
                                    }, "Delete" }
                                }
                            }
                        }
                    })}
                }
            }
        }
    }
}

#[component]
fn UsersPage(mut dashboard: Signal<Dashboard>) -> Element {
    let users = dashboard.read().users().to_vec();
    rsx! {
        div { id: "users",
            h2 { "Manage Users" }
            button { class: "btn-custom", onclick: move |_| dashboard.write().begin_create_user(), "Create User" }
            table { class: "table",
                thead {
                    tr { th { "ID" } th { "Full Name" } th { "Email" } th { "Address" } th { "Phone Number" } th { "Role" } th { "Actions" } }
                }
                tbody {
                    { users.into_iter().map(|user| {
                        let id = user.id.clone().unwrap_or_default();
                        let edit_id = id.clone();
                        let delete_id = id.clone();
                        rsx! {
                            tr { key: "{id}",
                                td { "{id}" }
                                td { "{user.full_name}" }
                                td { "{user.email}" }
                                td { "{user.address}" }
                                td { "{user.phone_number}" }
                                td { "{user.role}" }
                                td { class: "table-actions",
                                    button { class: "btn-custom", onclick: move |_| {
                                        if let Err(err) = dashboard.write().begin_edit_user(&edit_id) { warn!(error = %err, "cannot edit user"); }
                                    }, "Edit" }
                                    button { class: "btn-custom btn-danger", onclick: move |_| {
                                        dashboard.write().request_delete_user(delete_id.clone());
                                        confirm_and_delete(dashboard);
                                    }, "Delete" }
                                }
                            }
                        }
                    })}
                }
            }
        }
    }
}

#[component]
fn ProductModal(mut dashboard: Signal<Dashboard>) -> Element {
    let Some(form) = dashboard.read().product_form().cloned() else {
        return rsx! {};
    };
    let categories = dashboard.read().categories().to_vec();
    let draft = form.draft.clone();
    let category = draft.category_id.clone().unwrap_or_default();
    let price = draft.price_input().to_string();

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal",
                div { class: "modal-header",
                    h3 { "{form.title()}" }
                    button { class: "close", onclick: move |_| dashboard.write().cancel_product_form(), "×" }
                }
                { form.error.clone().map(|error| rsx! { div { class: "alert", "{error}" } }) }
                label { "Product Name" }
                input { r#type: "text", placeholder: "Enter product name", value: "{draft.name}",
                    oninput: move |evt| edit_product(dashboard, |d| d.set_name(evt.value())) }
                label { "Price" }
                input { r#type: "text", inputmode: "decimal", placeholder: "Enter product price",
                    value: "{price}",
                    oninput: move |evt| edit_product(dashboard, |d| d.set_price_input(evt.value())) }
                label { "Category" }
                select { value: "{category}",
                    onchange: move |evt| edit_product(dashboard, |d| d.set_category(&evt.value())),
                    option { value: "", "Select category" }
                    { categories.iter().map(|c| {
                        let id = c.id.clone().unwrap_or_default();
                        let selected = id == category;
                        rsx! { option { key: "{id}", value: "{id}", selected: selected, "{c.name}" } }
                    })}
                }
                div { class: "checkbox",
                    input { r#type: "checkbox", checked: draft.active,
                        onchange: move |evt| edit_product(dashboard, |d| d.set_active(evt.checked())) }
                    span { "Active" }
                }
                label { "Images" }
                { draft.images.iter().cloned().enumerate().map(|(index, image)| rsx! {
                    div { key: "{index}", class: "row-item",
                        input { r#type: "text", placeholder: "Image URL", value: "{image.name}",
                            oninput: move |evt| edit_product(dashboard, |d| d.set_image_name(index, evt.value())) }
                        button { class: "btn-danger", onclick: move |_| edit_product(dashboard, |d| d.remove_image(index)), "Remove" }
                    }
                })}
                button { class: "ghost-btn", onclick: move |_| edit_product(dashboard, ProductDraft::add_image), "Add Image" }
                label { "Sizes" }
                { draft.sizes.iter().cloned().enumerate().map(|(index, size)| rsx! {
                    div { key: "{index}", class: "row-item",
                        input { r#type: "text", placeholder: "Size", value: "{size}",
                            oninput: move |evt| edit_product(dashboard, |d| d.set_size(index, evt.value())) }
                        button { class: "btn-danger", onclick: move |_| edit_product(dashboard, |d| d.remove_size(index)), "Remove" }
                    }
                })}
                button { class: "ghost-btn", onclick: move |_| edit_product(dashboard, ProductDraft::add_size), "Add Size" }
                div { class: "actions",
                    button { onclick: move |_| submit_product(dashboard), "{form.submit_label()}" }
                }
            }
        }
    }
}

#[component]
fn UserModal(mut dashboard: Signal<Dashboard>) -> Element {
    let Some(form) = dashboard.read().user_form().cloned() else {
        return rsx! {};
    };
    let draft = form.draft.clone();

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal",
                div { class: "modal-header",
                    h3 { "{form.title()}" }
                    button { class: "close", onclick: move |_| dashboard.write().cancel_user_form(), "×" }
                }
                { form.error.clone().map(|error| rsx! { div { class: "alert", "{error}" } }) }
                label { "Full Name" }
                input { r#type: "text", placeholder: "Enter full name", value: "{draft.full_name}",
                    oninput: move |evt| edit_user(dashboard, |d| d.set_full_name(evt.value())) }
                label { "Email" }
                input { r#type: "email", placeholder: "Enter email", value: "{draft.email}",
                    oninput: move |evt| edit_user(dashboard, |d| d.set_email(evt.value())) }
                label { "Password" }
                input { r#type: "password", placeholder: "Enter password", value: "{draft.password}",
                    oninput: move |evt| edit_user(dashboard, |d| d.set_password(evt.value())) }
                label { "Address" }
                input { r#type: "text", placeholder: "Enter address", value: "{draft.address}",
                    oninput: move |evt| edit_user(dashboard, |d| d.set_address(evt.value())) }
                label { "Phone Number" }
                input { r#type: "text", placeholder: "Enter phone number", value: "{draft.phone_number}",
                    oninput: move |evt| edit_user(dashboard, |d| d.set_phone_number(evt.value())) }
                label { "Role" }
                select { value: "{draft.role.as_str()}",
                    onchange: move |evt| {
                        match evt.value().parse::<Role>() {
                            Ok(role) => edit_user(dashboard, |d| d.set_role(role)),
                            Err(err) => warn!(error = %err, "ignoring role"),
                        }
                    },
                    { Role::ALL.iter().map(|role| {
                        let selected = *role == draft.role;
                        rsx! { option { key: "{role.as_str()}", value: "{role.as_str()}", selected: selected, "{role.label()}" } }
                    })}
                }
                div { class: "actions",
                    button { onclick: move |_| submit_user(dashboard), "{form.submit_label()}" }
                }
            }
        }
    }
}

// ---------- Styles ----------
const STYLE: &str = r#"
:root { --bg: #f4f6fb; --panel: #ffffff; --muted: #6b7385; --text: #1d2433; --accent: #2f6fed; --danger: #d64545; --border: rgba(0,0,0,0.08); --radius: 12px; }
* { box-sizing: border-box; }
body { margin: 0; background: var(--bg); color: var(--text); font-family: "Inter", system-ui, -apple-system, sans-serif; }
.dashboard-container { display: grid; grid-template-columns: 220px 1fr; gap: 18px; max-width: 1200px; margin: 32px auto; padding: 0 18px; }
.sidebar { background: var(--panel); border: 1px solid var(--border); border-radius: var(--radius); padding: 16px; height: fit-content; }
.sidebar-header h3 { margin: 0 0 12px; }
.sidebar-menu { list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 6px; }
.sidebar-menu li { padding: 8px 10px; border-radius: 8px; cursor: pointer; color: var(--muted); font-weight: 600; }
.sidebar-menu li.active, .sidebar-menu li:hover { background: rgba(47,111,237,0.1); color: var(--accent); }
.main-content { background: var(--panel); border: 1px solid var(--border); border-radius: var(--radius); padding: 18px; }
.main-content h2 { margin: 0 0 12px; }
.table { width: 100%; border-collapse: collapse; margin-top: 14px; }
.table th, .table td { text-align: left; padding: 8px 10px; border-bottom: 1px solid var(--border); }
.table tbody tr:nth-child(odd) { background: rgba(0,0,0,0.02); }
.table-actions { display: flex; gap: 6px; }
button { padding: 8px 12px; border: none; border-radius: 8px; background: var(--accent); color: #fff; font-weight: 700; cursor: pointer; }
.btn-danger { background: var(--danger); }
.ghost-btn { background: transparent; color: var(--accent); border: 1px dashed var(--accent); margin-top: 6px; }
.modal-backdrop { position: fixed; inset: 0; background: rgba(15,20,30,0.45); display: flex; align-items: flex-start; justify-content: center; padding-top: 60px; }
.modal { width: 480px; max-height: 85vh; overflow-y: auto; background: var(--panel); border-radius: var(--radius); padding: 18px; box-shadow: 0 18px 48px rgba(0,0,0,0.25); }
.modal-header { display: flex; justify-content: space-between; align-items: center; }
.modal-header h3 { margin: 0; }
.close { background: transparent; color: var(--muted); font-size: 20px; padding: 0 6px; }
.alert { margin-top: 10px; padding: 10px 12px; border-radius: 8px; background: rgba(214,69,69,0.12); color: var(--danger); }
label { display: block; margin-top: 10px; font-weight: 700; }
input, select { width: 100%; margin-top: 6px; padding: 8px 10px; border-radius: 8px; border: 1px solid var(--border); }
.checkbox { display: flex; align-items: center; gap: 8px; margin-top: 10px; }
.checkbox input { width: auto; margin: 0; }
.row-item { display: flex; gap: 8px; margin-top: 6px; }
.row-item input { margin-top: 0; }
.actions { display: flex; gap: 10px; margin-top: 16px; }
@media (max-width: 760px) { .dashboard-container { grid-template-columns: 1fr; } .modal { width: 94vw; } }
"#;
