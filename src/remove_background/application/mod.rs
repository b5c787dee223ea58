pub mod error;
pub mod removal_service;
