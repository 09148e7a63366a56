pub mod data_core;
pub mod document;
pub mod request;
