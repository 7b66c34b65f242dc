/// Database connection and schema creation
pub mod database;

/// Catalog configuration loading from catalog.toml
pub mod catalog;

/// Idempotent seeding of organizations, group companies and shared products
pub mod seed;
