//! One `ApiRequest` value per HTTP call the dashboard makes.
//!
//! The reducer produces requests, a transport (reqwasm in the browser,
//! `services::execute` natively) runs them, and the outcome goes back through
//! `Dashboard::apply` together with the request that caused it.

use crate::errors::{ApiError, ApiResult};
use crate::models::{Category, Product, User};
use serde::de::DeserializeOwned;

pub const DEFAULT_API_BASE: &str = "http://localhost:9999";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ApiRequest {
    ListProducts,
    ListUsers,
    ListCategories,
    CreateProduct(Product),
    UpdateProduct { id: String, product: Product },
    DeleteProduct(String),
    CreateUser(User),
    UpdateUser { id: String, user: User },
    DeleteUser(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ApiResponse {
    Products(Vec<Product>),
    Users(Vec<User>),
    Categories(Vec<Category>),
    ProductSaved(Product),
    UserSaved(User),
    Deleted,
}

impl ApiRequest {
    pub fn method(&self) -> HttpMethod {
        match self {
            ApiRequest::ListProducts | ApiRequest::ListUsers | ApiRequest::ListCategories => {
                HttpMethod::Get
            }
            ApiRequest::CreateProduct(_) | ApiRequest::CreateUser(_) => HttpMethod::Post,
            ApiRequest::UpdateProduct { .. } | ApiRequest::UpdateUser { .. } => HttpMethod::Put,
            ApiRequest::DeleteProduct(_) | ApiRequest::DeleteUser(_) => HttpMethod::Delete,
        }
    }

    pub fn path(&self) -> String {
        match self {
            ApiRequest::ListProducts | ApiRequest::CreateProduct(_) => "/products".into(),
            ApiRequest::ListUsers | ApiRequest::CreateUser(_) => "/users".into(),
            ApiRequest::ListCategories => "/categories".into(),
            ApiRequest::UpdateProduct { id, .. } | ApiRequest::DeleteProduct(id) => {
                format!("/products/{id}")
            }
            ApiRequest::UpdateUser { id, .. } | ApiRequest::DeleteUser(id) => {
                format!("/users/{id}")
            }
        }
    }

    pub fn url(&self, base: &str) -> String {
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            self.path().trim_start_matches('/')
        )
    }

    /// JSON body for writes; `None` for reads and deletes.
    pub fn body(&self) -> ApiResult<Option<String>> {
        let body = match self {
            ApiRequest::CreateProduct(product) | ApiRequest::UpdateProduct { product, .. } => {
                Some(serde_json::to_string(product)?)
            }
            ApiRequest::CreateUser(user) | ApiRequest::UpdateUser { user, .. } => {
                Some(serde_json::to_string(user)?)
            }
            _ => None,
        };
        Ok(body)
    }

    /// Decode a successful response body. Delete responses carry nothing we use.
    pub fn decode(&self, body: &str) -> ApiResult<ApiResponse> {
        let response = match self {
            ApiRequest::ListProducts => ApiResponse::Products(parse(body)?),
            ApiRequest::ListUsers => ApiResponse::Users(parse(body)?),
            ApiRequest::ListCategories => ApiResponse::Categories(parse(body)?),
            ApiRequest::CreateProduct(_) | ApiRequest::UpdateProduct { .. } => {
                ApiResponse::ProductSaved(parse(body)?)
            }
            ApiRequest::CreateUser(_) | ApiRequest::UpdateUser { .. } => {
                ApiResponse::UserSaved(parse(body)?)
            }
            ApiRequest::DeleteProduct(_) | ApiRequest::DeleteUser(_) => ApiResponse::Deleted,
        };
        Ok(response)
    }

    pub fn describe(&self) -> &'static str {
        match self {
            ApiRequest::ListProducts => "fetching products",
            ApiRequest::ListUsers => "fetching users",
            ApiRequest::ListCategories => "fetching categories",
            ApiRequest::CreateProduct(_) => "creating product",
            ApiRequest::UpdateProduct { .. } => "updating product",
            ApiRequest::DeleteProduct(_) => "deleting product",
            ApiRequest::CreateUser(_) => "creating user",
            ApiRequest::UpdateUser { .. } => "updating user",
            ApiRequest::DeleteUser(_) => "deleting user",
        }
    }
}

fn parse<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|err| ApiError::Decode(format!("{err}: {body}")))
}
