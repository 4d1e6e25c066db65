// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// One of the three fixed daily intervals an employee can be scheduled for.
///
/// The numeric value (0, 1, 2) is what the boundary receives and what the
/// store persists. The textual range is what responses echo back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeSlot {
    /// 09:00 to 12:00.
    Morning,
    /// 14:00 to 17:00.
    Afternoon,
    /// 18:00 to 21:00.
    Evening,
}

impl TimeSlot {
    /// All time slots in ascending order.
    pub const ALL: [Self; 3] = [Self::Morning, Self::Afternoon, Self::Evening];

    /// Builds a time slot from its raw numeric value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeSlot` for anything other than 0, 1 or 2.
    pub const fn from_value(value: i32) -> Result<Self, DomainError> {
        match value {
            0 => Ok(Self::Morning),
            1 => Ok(Self::Afternoon),
            2 => Ok(Self::Evening),
            _ => Err(DomainError::InvalidTimeSlot { value }),
        }
    }

    /// Returns the raw numeric value of this slot.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::Morning => 0,
            Self::Afternoon => 1,
            Self::Evening => 2,
        }
    }

    /// Returns the canonical wall-clock range, e.g. `"14:00–17:00"`.
    #[must_use]
    pub const fn time_range(self) -> &'static str {
        match self {
            Self::Morning => "09:00–12:00",
            Self::Afternoon => "14:00–17:00",
            Self::Evening => "18:00–21:00",
        }
    }
}

impl TryFrom<i32> for TimeSlot {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.time_range())
    }
}
