pub mod draft;
pub mod limits;
pub mod roles;
pub mod routes;
pub mod types;
