pub mod error;
pub mod utils;
pub mod yahoo;
pub mod yahoo_dto;

pub use error::FetchError;
