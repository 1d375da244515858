//! Services catalog: CRUD over the `services` collection plus default seeding.

pub mod defaults;
pub mod domain;
pub mod repository;
pub mod seed;
pub mod service;

pub use service::CatalogService;
