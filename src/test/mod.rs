mod app;
mod calc;
mod stocks;
