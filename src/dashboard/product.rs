use super::form::Draft;
use crate::errors::ValidationError;
use crate::models::{Product, ProductImage};

/// Editable copy of a product.
///
/// `price` holds the price input exactly as typed, so a half-entered value
/// like "1." or "-" survives re-rendering. It is parsed on submit.
/// `category_id` is `None` until a category is picked.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub active: bool,
    pub category_id: Option<String>,
    pub images: Vec<ProductImage>,
    pub sizes: Vec<String>,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: "0".to_string(),
            active: true,
            category_id: None,
            images: Vec::new(),
            sizes: Vec::new(),
        }
    }
}

impl ProductDraft {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, price: Option<f64>) {
        self.price = price.map(|price| price.to_string()).unwrap_or_default();
    }

    /// Take the raw text of the price input.
    pub fn set_price_input(&mut self, raw: impl Into<String>) {
        self.price = raw.into();
    }

    /// The typed price, or `None` while it is empty, not a number, or not finite.
    pub fn parsed_price(&self) -> Option<f64> {
        self.price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite())
    }

    /// An empty value means "no category selected".
    pub fn set_category(&mut self, category_id: &str) {
        self.category_id = match category_id.trim() {
            "" => None,
            id => Some(id.to_string()),
        };
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn add_image(&mut self) {
        let id = self.images.len() as u32 + 1;
        self.images.push(ProductImage {
            id,
            name: String::new(),
        });
    }

    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    pub fn set_image_name(&mut self, index: usize, name: impl Into<String>) {
        if let Some(image) = self.images.get_mut(index) {
            image.name = name.into();
        }
    }

    pub fn add_size(&mut self) {
        self.sizes.push(String::new());
    }

    pub fn remove_size(&mut self, index: usize) {
        if index < self.sizes.len() {
            self.sizes.remove(index);
        }
    }

    pub fn set_size(&mut self, index: usize, size: impl Into<String>) {
        if let Some(slot) = self.sizes.get_mut(index) {
            *slot = size.into();
        }
    }

    pub fn price_input(&self) -> &str {
        &self.price
    }
}

impl Draft for ProductDraft {
    type Record = Product;

    const ENTITY: &'static str = "Product";

    fn from_record(record: &Product) -> Self {
        let mut draft = Self {
            name: record.name.clone(),
            price: record.price.to_string(),
            active: record.active,
            category_id: None,
            images: record.images.clone(),
            sizes: record.sizes.clone(),
        };
        draft.set_category(&record.category_id);
        draft
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let price = match (self.name.is_empty(), self.parsed_price(), &self.category_id) {
            (false, Some(price), Some(_)) => price,
            _ => return Err(ValidationError::MissingRequiredFields),
        };
        if price < 0.0 {
            return Err(ValidationError::NegativePrice);
        }
        Ok(())
    }

    fn to_record(&self, id: String) -> Product {
        Product {
            id: Some(id),
            name: self.name.clone(),
            price: self.parsed_price().unwrap_or_default(),
            active: self.active,
            category_id: self.category_id.clone().unwrap_or_default(),
            images: self.images.clone(),
            sizes: self.sizes.clone(),
        }
    }
}
