// Candidate intake, listing, lookup and deletion.
// Handlers stay thin; validation and file/record bookkeeping live in `service`.

pub mod files;
pub mod handlers;
pub mod models;
pub mod service;
pub mod store;
pub mod validation;
