//! Return metrics derived from invested and current totals.

mod performance_model;
mod returns_calculator;

pub use performance_model::TotalReturn;
pub use returns_calculator::{
    absolute_return, compound_annual_growth_rate, return_percentage, total_return,
};
