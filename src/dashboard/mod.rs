//! Dashboard view state and its transitions.
//!
//! Nothing here touches the network. Operations that need the backend return
//! an [`ApiRequest`]; whoever runs it hands the outcome back to
//! [`Dashboard::apply`], which reconciles the cached collections.

mod form;
mod product;
mod user;

pub use form::{Draft, FormMode, FormSession, Submission};
pub use product::ProductDraft;
pub use user::UserDraft;

use crate::api::{ApiRequest, ApiResponse};
use crate::collection::{appended, find_by_id, remove_by_id, replace_by_id};
use crate::errors::{ApiError, ApiResult, DashboardError, DashboardResult};
use crate::logging::log_api_failure;
use crate::models::{Category, Product, User};
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Products,
    Users,
}

/// A delete waiting for the admin to confirm it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingDelete {
    Product(String),
    User(String),
}

impl PendingDelete {
    pub fn prompt(&self) -> &'static str {
        match self {
            PendingDelete::Product(_) => "Are you sure you want to delete this product?",
            PendingDelete::User(_) => "Are you sure you want to delete this user?",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dashboard {
    products: Vec<Product>,
    users: Vec<User>,
    categories: Vec<Category>,
    page: Page,
    product_form: Option<FormSession<ProductDraft>>,
    user_form: Option<FormSession<UserDraft>>,
    pending_delete: Option<PendingDelete>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn show_page(&mut self, page: Page) {
        self.page = page;
    }

    pub fn category_name(&self, category_id: &str) -> Option<&str> {
        find_by_id(&self.categories, category_id).map(|category| category.name.as_str())
    }

    /// The three reads issued when the dashboard mounts.
    pub fn load_requests(&self) -> [ApiRequest; 3] {
        [
            ApiRequest::ListProducts,
            ApiRequest::ListUsers,
            ApiRequest::ListCategories,
        ]
    }

    // ---------- products ----------

    pub fn product_form(&self) -> Option<&FormSession<ProductDraft>> {
        self.product_form.as_ref()
    }

    pub fn product_form_mut(&mut self) -> Option<&mut FormSession<ProductDraft>> {
        self.product_form.as_mut()
    }

    pub fn begin_create_product(&mut self) {
        self.product_form = Some(FormSession::creating());
    }

    pub fn begin_edit_product(&mut self, id: &str) -> DashboardResult<()> {
        let record = find_by_id(&self.products, id)
            .ok_or_else(|| DashboardError::UnknownRecord(format!("products/{id}")))?;
        self.product_form = Some(FormSession::editing(id, record));
        Ok(())
    }

    pub fn cancel_product_form(&mut self) {
        self.product_form = None;
    }

    pub fn submit_product(&mut self) -> DashboardResult<ApiRequest> {
        let form = self
            .product_form
            .as_mut()
            .ok_or(DashboardError::NoActiveForm)?;
        let request = match form.submit(&self.products)? {
            Submission::Create(product) => ApiRequest::CreateProduct(product),
            Submission::Update { id, record } => ApiRequest::UpdateProduct {
                id,
                product: record,
            },
        };
        Ok(request)
    }

    pub fn request_delete_product(&mut self, id: impl Into<String>) {
        self.pending_delete = Some(PendingDelete::Product(id.into()));
    }

    // ---------- users ----------

    pub fn user_form(&self) -> Option<&FormSession<UserDraft>> {
        self.user_form.as_ref()
    }

    pub fn user_form_mut(&mut self) -> Option<&mut FormSession<UserDraft>> {
        self.user_form.as_mut()
    }

    pub fn begin_create_user(&mut self) {
        self.user_form = Some(FormSession::creating());
    }

    pub fn begin_edit_user(&mut self, id: &str) -> DashboardResult<()> {
        let record = find_by_id(&self.users, id)
            .ok_or_else(|| DashboardError::UnknownRecord(format!("users/{id}")))?;
        self.user_form = Some(FormSession::editing(id, record));
        Ok(())
    }

    pub fn cancel_user_form(&mut self) {
        self.user_form = None;
    }

    pub fn submit_user(&mut self) -> DashboardResult<ApiRequest> {
        let form = self.user_form.as_mut().ok_or(DashboardError::NoActiveForm)?;
        let request = match form.submit(&self.users)? {
            Submission::Create(user) => ApiRequest::CreateUser(user),
            Submission::Update { id, record } => ApiRequest::UpdateUser { id, user: record },
        };
        Ok(request)
    }

    pub fn request_delete_user(&mut self, id: impl Into<String>) {
        self.pending_delete = Some(PendingDelete::User(id.into()));
    }

    // ---------- delete confirmation ----------

    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    pub fn confirm_delete(&mut self) -> DashboardResult<ApiRequest> {
        let request = match self
            .pending_delete
            .take()
            .ok_or(DashboardError::NoPendingDelete)?
        {
            PendingDelete::Product(id) => ApiRequest::DeleteProduct(id),
            PendingDelete::User(id) => ApiRequest::DeleteUser(id),
        };
        Ok(request)
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    // ---------- reconciliation ----------

    /// Fold the outcome of `request` into the cached collections.
    ///
    /// Failures are logged and leave every collection and open form as they
    /// were. A successful create or update closes the matching form.
    pub fn apply(
        &mut self,
        request: &ApiRequest,
        outcome: ApiResult<ApiResponse>,
    ) -> DashboardResult<()> {
        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                log_api_failure(request, &err);
                return Err(err.into());
            }
        };

        match (request, response) {
            (ApiRequest::ListProducts, ApiResponse::Products(products)) => {
                debug!(count = products.len(), "products loaded");
                self.products = products;
            }
            (ApiRequest::ListUsers, ApiResponse::Users(users)) => {
                debug!(count = users.len(), "users loaded");
                self.users = users;
            }
            (ApiRequest::ListCategories, ApiResponse::Categories(categories)) => {
                debug!(count = categories.len(), "categories loaded");
                self.categories = categories;
            }
            (ApiRequest::CreateProduct(_), ApiResponse::ProductSaved(product)) => {
                info!(id = ?product.id, "product created");
                self.products = appended(&self.products, product);
                self.product_form = None;
            }
            (ApiRequest::UpdateProduct { id, .. }, ApiResponse::ProductSaved(product)) => {
                info!(%id, "product updated");
                self.products = replace_by_id(&self.products, id, product);
                self.product_form = None;
            }
            (ApiRequest::DeleteProduct(id), ApiResponse::Deleted) => {
                info!(%id, "product deleted");
                self.products = remove_by_id(&self.products, id);
            }
            (ApiRequest::CreateUser(_), ApiResponse::UserSaved(user)) => {
                info!(id = ?user.id, "user created");
                self.users = appended(&self.users, user);
                self.user_form = None;
            }
            (ApiRequest::UpdateUser { id, .. }, ApiResponse::UserSaved(user)) => {
                info!(%id, "user updated");
                self.users = replace_by_id(&self.users, id, user);
                self.user_form = None;
            }
            (ApiRequest::DeleteUser(id), ApiResponse::Deleted) => {
                info!(%id, "user deleted");
                self.users = remove_by_id(&self.users, id);
            }
            (request, response) => {
                let err = ApiError::Decode(format!("unexpected response {response:?}"));
                log_api_failure(request, &err);
                return Err(err.into());
            }
        }
        Ok(())
    }
}
