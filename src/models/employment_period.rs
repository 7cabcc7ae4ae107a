//! Employment period model.
//!
//! Derives proportional months of service from admission and dismissal
//! dates, counting a trailing partial month of at least
//! [`MINIMUM_DAYS_FOR_MONTH`] days as a full month.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Days of a partial month that earn a full twelfth (Lei 4.090/1962 art. 1 §2).
pub const MINIMUM_DAYS_FOR_MONTH: i64 = 15;

/// The span between admission and dismissal, both inclusive.
///
/// # Example
///
/// ```
/// use severance_engine::models::EmploymentPeriod;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = EmploymentPeriod::new(
///     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 24).unwrap(),
/// ).unwrap();
/// assert_eq!(period.months_worked(), Decimal::from(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentPeriod {
    /// First day of employment.
    pub admission_date: NaiveDate,
    /// Last day of employment.
    pub dismissal_date: NaiveDate,
}

impl EmploymentPeriod {
    /// Creates a period, rejecting a dismissal date before the admission date.
    pub fn new(admission_date: NaiveDate, dismissal_date: NaiveDate) -> EngineResult<Self> {
        let period = Self {
            admission_date,
            dismissal_date,
        };
        period.validate()?;
        Ok(period)
    }

    /// Checks that the dismissal date is not before the admission date.
    pub fn validate(&self) -> EngineResult<()> {
        if self.dismissal_date < self.admission_date {
            return Err(EngineError::invalid_input(
                "dismissal_date",
                format!(
                    "dismissal date {} is before admission date {}",
                    self.dismissal_date, self.admission_date
                ),
            ));
        }
        Ok(())
    }

    /// Number of calendar days in the period, both ends inclusive.
    pub fn days(&self) -> i64 {
        (self.dismissal_date - self.admission_date).num_days() + 1
    }

    /// Proportional months of service.
    ///
    /// Whole calendar months are counted from the admission date; the
    /// remaining days count as one more month when they reach
    /// [`MINIMUM_DAYS_FOR_MONTH`].
    pub fn months_worked(&self) -> Decimal {
        // The dismissal day is worked, so the period ends the day after.
        let end = self
            .dismissal_date
            .succ_opt()
            .unwrap_or(self.dismissal_date);

        let mut whole_months: u32 = 0;
        let mut anchor = self.admission_date;
        while let Some(next) = self
            .admission_date
            .checked_add_months(Months::new(whole_months + 1))
        {
            if next > end {
                break;
            }
            whole_months += 1;
            anchor = next;
        }

        let remaining_days = (end - anchor).num_days();
        if remaining_days >= MINIMUM_DAYS_FOR_MONTH {
            whole_months += 1;
        }

        Decimal::from(whole_months)
    }
}
