pub mod app;
pub mod calc;
pub mod stocks;
pub mod ui;

pub use app::App;
pub use stocks::Stocks;
