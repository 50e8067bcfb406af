// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// The resolved work status of one employee on one date.
///
/// Derived on demand from the rotation, vacation intervals, and the
/// override snapshot; never stored or cached beyond a single query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayStatus {
    /// A regular working day.
    Working,
    /// The regular 5x1 rotation day off.
    CyclicDayOff,
    /// Inside a configured vacation interval.
    OnVacation,
    /// Manually pulled in for emergency work despite being otherwise off.
    EmergencyWork {
        /// The note carried by the override, if any.
        note: Option<String>,
    },
    /// Manually excused from an otherwise-working day.
    ExtraDayOff {
        /// The note carried by the override, if any.
        note: Option<String>,
    },
}

impl DayStatus {
    /// Converts this status to its string label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Working => "working",
            Self::CyclicDayOff => "cyclic_day_off",
            Self::OnVacation => "on_vacation",
            Self::EmergencyWork { .. } => "emergency_work",
            Self::ExtraDayOff { .. } => "extra_day_off",
        }
    }

    /// Returns whether the employee is off duty under this status.
    ///
    /// `EmergencyWork` is a working status even though the baseline was
    /// off.
    #[must_use]
    pub const fn is_off_duty(&self) -> bool {
        matches!(
            self,
            Self::CyclicDayOff | Self::OnVacation | Self::ExtraDayOff { .. }
        )
    }
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
