use crate::api::{ApiRequest, ApiResponse};
use crate::collection::{self, Record};
use crate::errors::{ApiError, ApiResult};
use crate::models::{Category, Product, ProductImage, Role, User};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// The backend contract the dashboard talks to.
pub trait AdminService {
    fn list_products(&self) -> ApiResult<Vec<Product>>;
    fn list_users(&self) -> ApiResult<Vec<User>>;
    fn list_categories(&self) -> ApiResult<Vec<Category>>;

    fn create_product(&self, product: Product) -> ApiResult<Product>;
    fn update_product(&self, id: &str, product: Product) -> ApiResult<Product>;
    fn delete_product(&self, id: &str) -> ApiResult<()>;

    fn create_user(&self, user: User) -> ApiResult<User>;
    fn update_user(&self, id: &str, user: User) -> ApiResult<User>;
    fn delete_user(&self, id: &str) -> ApiResult<()>;
}

/// Run a request against a service, producing what the HTTP transport would.
pub fn execute<S: AdminService + ?Sized>(
    service: &S,
    request: &ApiRequest,
) -> ApiResult<ApiResponse> {
    let response = match request {
        ApiRequest::ListProducts => ApiResponse::Products(service.list_products()?),
        ApiRequest::ListUsers => ApiResponse::Users(service.list_users()?),
        ApiRequest::ListCategories => ApiResponse::Categories(service.list_categories()?),
        ApiRequest::CreateProduct(product) => {
            ApiResponse::ProductSaved(service.create_product(product.clone())?)
        }
        ApiRequest::UpdateProduct { id, product } => {
            ApiResponse::ProductSaved(service.update_product(id, product.clone())?)
        }
        ApiRequest::DeleteProduct(id) => {
            service.delete_product(id)?;
            ApiResponse::Deleted
        }
        ApiRequest::CreateUser(user) => ApiResponse::UserSaved(service.create_user(user.clone())?),
        ApiRequest::UpdateUser { id, user } => {
            ApiResponse::UserSaved(service.update_user(id, user.clone())?)
        }
        ApiRequest::DeleteUser(id) => {
            service.delete_user(id)?;
            ApiResponse::Deleted
        }
    };
    Ok(response)
}

#[derive(Default)]
struct InMemoryState {
    products: Vec<Product>,
    users: Vec<User>,
    categories: Vec<Category>,
    calls: usize,
    fail_next: Option<ApiError>,
}

impl InMemoryState {
    /// Every call is counted; an injected failure is consumed by the next call.
    fn begin_call(&mut self) -> ApiResult<()> {
        self.calls += 1;
        match self.fail_next.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Backend held in process memory. Cloning shares the same state.
#[derive(Clone)]
pub struct InMemoryService {
    state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryService {
    pub fn empty() -> Self {
        Self {
            state: Arc::new(Mutex::new(InMemoryState::default())),
        }
    }

    pub fn new_with_sample() -> Self {
        let mut state = InMemoryState::default();
        state.categories = vec![
            Category {
                id: Some("1".into()),
                name: "Shoes".into(),
            },
            Category {
                id: Some("2".into()),
                name: "Shirts".into(),
            },
            Category {
                id: Some("3".into()),
                name: "Accessories".into(),
            },
        ];
        state.products = vec![
            Product {
                id: Some("1".into()),
                name: "Trail Runner".into(),
                price: 89.0,
                active: true,
                category_id: "1".into(),
                images: vec![ProductImage {
                    id: 1,
                    name: "https://cdn.example.com/trail-runner.png".into(),
                }],
                sizes: vec!["40".into(), "41".into(), "42".into()],
            },
            Product {
                id: Some("2".into()),
                name: "Linen Shirt".into(),
                price: 35.5,
                active: true,
                category_id: "2".into(),
                images: Vec::new(),
                sizes: vec!["S".into(), "M".into(), "L".into()],
            },
            Product {
                id: Some("3".into()),
                name: "Canvas Belt".into(),
                price: 12.0,
                active: false,
                category_id: "3".into(),
                images: Vec::new(),
                sizes: Vec::new(),
            },
        ];
        state.users = vec![
            User {
                id: Some("1".into()),
                full_name: "Store Admin".into(),
                email: "admin@example.com".into(),
                password: "admin".into(),
                address: "1 Main Street".into(),
                phone_number: "555-0100".into(),
                role: Role::Admin,
            },
            User {
                id: Some("2".into()),
                full_name: "Sam Courier".into(),
                email: "sam@example.com".into(),
                password: "courier".into(),
                address: "22 Depot Road".into(),
                phone_number: "555-0142".into(),
                role: Role::Shipper,
            },
        ];
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Seed a service from explicit collections.
    pub fn with_records(
        products: Vec<Product>,
        users: Vec<User>,
        categories: Vec<Category>,
    ) -> Self {
        let service = Self::empty();
        {
            let mut state = service.state();
            state.products = products;
            state.users = users;
            state.categories = categories;
        }
        service
    }

    /// Number of calls served so far, failed ones included.
    pub fn call_count(&self) -> usize {
        self.state().calls
    }

    /// Make the next call fail with `err`.
    pub fn fail_next(&self, err: ApiError) {
        self.state().fail_next = Some(err);
    }

    fn state(&self) -> MutexGuard<'_, InMemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryService {
    fn default() -> Self {
        Self::new_with_sample()
    }
}

fn insert_new<T: Record>(
    items: &mut Vec<T>,
    mut record: T,
    assign_id: impl FnOnce(&mut T, String),
    kind: &str,
) -> ApiResult<T> {
    match record.id().map(str::to_string) {
        Some(id) if collection::find_by_id(items, &id).is_some() => {
            return Err(ApiError::Conflict(format!("{kind} {id} already exists")));
        }
        Some(_) => {}
        None => {
            let id = collection::next_identifier(items)
                .map_err(|err| ApiError::Conflict(format!("{kind}: {err}")))?;
            assign_id(&mut record, id);
        }
    }
    *items = collection::appended(items, record.clone());
    Ok(record)
}

fn replace_existing<T: Record>(
    items: &mut Vec<T>,
    id: &str,
    record: T,
    kind: &str,
) -> ApiResult<T> {
    if collection::find_by_id(items, id).is_none() {
        return Err(ApiError::NotFound(format!("{kind}/{id}")));
    }
    *items = collection::replace_by_id(items, id, record.clone());
    Ok(record)
}

fn remove_existing<T: Record>(items: &mut Vec<T>, id: &str, kind: &str) -> ApiResult<()> {
    if collection::find_by_id(items, id).is_none() {
        return Err(ApiError::NotFound(format!("{kind}/{id}")));
    }
    *items = collection::remove_by_id(items, id);
    Ok(())
}

impl AdminService for InMemoryService {
    fn list_products(&self) -> ApiResult<Vec<Product>> {
        let mut state = self.state();
        state.begin_call()?;
        Ok(state.products.clone())
    }

    fn list_users(&self) -> ApiResult<Vec<User>> {
        let mut state = self.state();
        state.begin_call()?;
        Ok(state.users.clone())
    }

    fn list_categories(&self) -> ApiResult<Vec<Category>> {
        let mut state = self.state();
        state.begin_call()?;
        Ok(state.categories.clone())
    }

    fn create_product(&self, product: Product) -> ApiResult<Product> {
        let mut state = self.state();
        state.begin_call()?;
        insert_new(
            &mut state.products,
            product,
            |p, id| p.id = Some(id),
            "products",
        )
    }

    fn update_product(&self, id: &str, mut product: Product) -> ApiResult<Product> {
        let mut state = self.state();
        state.begin_call()?;
        product.id = Some(id.to_string());
        replace_existing(&mut state.products, id, product, "products")
    }

    fn delete_product(&self, id: &str) -> ApiResult<()> {
        let mut state = self.state();
        state.begin_call()?;
        remove_existing(&mut state.products, id, "products")
    }

    fn create_user(&self, user: User) -> ApiResult<User> {
        let mut state = self.state();
        state.begin_call()?;
        insert_new(&mut state.users, user, |u, id| u.id = Some(id), "users")
    }

    fn update_user(&self, id: &str, mut user: User) -> ApiResult<User> {
        let mut state = self.state();
        state.begin_call()?;
        user.id = Some(id.to_string());
        replace_existing(&mut state.users, id, user, "users")
    }

    fn delete_user(&self, id: &str) -> ApiResult<()> {
        let mut state = self.state();
        state.begin_call()?;
        remove_existing(&mut state.users, id, "users")
    }
}
