//! Contact form submissions: validate, persist, then notify (best effort).

pub mod domain;
pub mod notifier;
pub mod service;

pub use service::ContactService;
