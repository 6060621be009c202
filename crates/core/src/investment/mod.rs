//! Investment module - optional purchase and expense parameters echoed with a prediction.

mod investment_model;

#[cfg(test)]
mod investment_model_tests;

pub use investment_model::InvestmentParameters;
