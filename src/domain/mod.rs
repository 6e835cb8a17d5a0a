pub mod route;
pub mod route_table;
pub mod route_validation;
pub mod view_registry;
