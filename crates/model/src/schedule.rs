use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, ids::WorkScheduleId};

/// A trainer's daily work window with a break sub-window.
/// All fields are times of day; the schedule repeats every day.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct WorkSchedule {
    pub id: WorkScheduleId,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub break_start: NaiveTime,
    pub break_end: NaiveTime,
}

impl WorkSchedule {
    pub fn new(
        start_time: NaiveTime,
        end_time: NaiveTime,
        break_start: NaiveTime,
        break_end: NaiveTime,
    ) -> WorkSchedule {
        WorkSchedule {
            id: WorkScheduleId::new(),
            start_time,
            end_time,
            break_start,
            break_end,
        }
    }

    /// The work window fully contains the candidate interval.
    /// The break window is checked separately against the booking time.
    pub fn is_available(&self, start: NaiveTime, end: NaiveTime) -> bool {
        self.start_time <= start && self.end_time >= end
    }

    /// Inclusive on both ends.
    pub fn in_break(&self, at: NaiveTime) -> bool {
        self.break_start <= at && at <= self.break_end
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.start_time >= self.end_time {
            return Err(ValidationError::TimeOrder);
        }
        if self.break_start >= self.break_end {
            return Err(ValidationError::BreakOrder);
        }
        if self.break_start <= self.start_time && self.break_end >= self.end_time {
            return Err(ValidationError::BreakCoversWork);
        }
        Ok(())
    }
}
