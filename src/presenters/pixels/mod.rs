pub mod adapter;
pub mod factory;
pub mod presenter;
