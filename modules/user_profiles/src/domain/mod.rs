pub mod error;
pub mod form;
pub mod identity;
pub mod repo;
pub mod service;
