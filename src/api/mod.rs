/*
 * Responsibility
 * - Public surface of the api module (re-export routes())
 */
pub mod dto;
pub mod handlers;
mod routes;

pub use routes::routes;
