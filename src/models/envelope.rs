use serde::{Deserialize, Serialize};

/// Every read endpoint wraps its payload as `{ "data": { ... } }`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

impl<T> ApiEnvelope<T> {
    pub fn into_inner(self) -> T {
        self.data
    }
}
