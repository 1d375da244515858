//! Service layer providing the site's business operations on top of models.
//! - `catalog`: services collection CRUD plus default seeding.
//! - `contact`: contact form submissions and the best-effort notification.
//! - `store`: the lazily established, process-wide database handle.

pub mod errors;
pub mod runtime;
pub mod store;
pub mod catalog;
pub mod contact;
#[cfg(test)]
pub mod test_support;
