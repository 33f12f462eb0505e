pub mod balance;
pub mod errors;
pub mod models;
pub mod services;
pub mod split;
pub mod validation;
