//! Identifier-keyed helpers over the cached collections.
//!
//! Collections are never edited in place: every helper returns a fresh `Vec`
//! that replaces the previous one.

use crate::errors::ValidationError;
use crate::models::{Category, Product, User};

pub trait Record: Clone {
    fn id(&self) -> Option<&str>;
}

impl Record for Product {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Record for User {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Record for Category {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Next client-side identifier: the largest integer id plus one, as a string.
///
/// Ids that do not parse as unsigned integers are skipped, and the floor is 0,
/// so an empty collection yields "1". Fails once the largest id is `u64::MAX`.
/// Two sessions creating at once can compute the same value; the backend is
/// expected to reject the second create.
pub fn next_identifier<T: Record>(items: &[T]) -> Result<String, ValidationError> {
    let max = items
        .iter()
        .filter_map(|item| item.id())
        .filter_map(|id| id.trim().parse::<u64>().ok())
        .fold(0, u64::max);
    max.checked_add(1)
        .map(|next| next.to_string())
        .ok_or(ValidationError::IdentifiersExhausted)
}

pub fn replace_by_id<T: Record>(items: &[T], id: &str, record: T) -> Vec<T> {
    items
        .iter()
        .map(|item| {
            if item.id() == Some(id) {
                record.clone()
            } else {
                item.clone()
            }
        })
        .collect()
}

pub fn remove_by_id<T: Record>(items: &[T], id: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.id() != Some(id))
        .cloned()
        .collect()
}

pub fn appended<T: Record>(items: &[T], record: T) -> Vec<T> {
    let mut next = items.to_vec();
    next.push(record);
    next
}

pub fn find_by_id<'a, T: Record>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == Some(id))
}
