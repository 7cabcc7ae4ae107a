//! Calculation logic for the Severance Engine.
//!
//! This module contains the input validation, one calculation function per
//! component of the breakdown (hourly rate, overtime premiums, proportional
//! 13th salary, vacation pay with the one-third bonus, severance fund
//! contribution), and the pipeline that runs them in order.

mod arithmetic;
mod engine;
mod hourly_rate;
mod overtime;
mod severance_fund;
mod thirteenth_salary;
mod vacation_pay;
mod validation;

pub use engine::{
    WARNING_MONTHS_EXCEED_YEAR, WARNING_WITH_CAUSE_PROPORTIONAL, calculate_severance, compute,
};
pub use hourly_rate::{HourlyRateResult, calculate_hourly_rate};
pub use overtime::{OvertimeResult, calculate_overtime};
pub use severance_fund::{SeveranceFundResult, calculate_severance_fund, penalty_multiplier};
pub use thirteenth_salary::{ThirteenthSalaryResult, calculate_thirteenth_salary};
pub use vacation_pay::{VacationPayResult, calculate_vacation_pay};
pub use validation::validate_input;
