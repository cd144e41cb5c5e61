//! Response DTOs
//!
//! Data structures for API response bodies. Single entities are serialized
//! directly; lists are wrapped in a `{ data, meta }` envelope.

use serde::Serialize;

/// List envelope. There is no pagination: `total` is the length of `data`.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub meta: ListMeta,
}

#[derive(Debug, Serialize)]
pub struct ListMeta {
    pub total: usize,
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(data: Vec<T>) -> Self {
        let total = data.len();
        Self {
            data,
            meta: ListMeta { total },
        }
    }
}
