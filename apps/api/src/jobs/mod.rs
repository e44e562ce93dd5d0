// Job tracking: validation of incoming records and CRUD over the Record Store.

pub mod handlers;
pub mod service;
pub mod validation;
