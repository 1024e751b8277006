//! Serde mirror of the status dataset records.

use serde::{Deserialize, Serialize};

use fedcal_core::types::{Date, Dept, DeptStatus};

/// A closed day interval as stored in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInterval {
    /// First covered day.
    pub start: Date,
    /// Last covered day.
    pub end: Date,
}

/// One dataset record: a department's status over a closed interval.
///
/// ```json
/// { "interval": { "start": "1970-01-01", "end": "1970-09-30" },
///   "department": "DOC",
///   "status": "ND" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    /// The covered day range.
    pub interval: RawInterval,
    /// The department.
    pub department: Dept,
    /// The status over the whole interval.
    pub status: DeptStatus,
}

/// A validated status interval: a maximal run of identical status for a
/// single department.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusInterval {
    /// First covered day.
    pub start: Date,
    /// Last covered day.
    pub end: Date,
    /// The department.
    pub department: Dept,
    /// The status over the whole interval.
    pub status: DeptStatus,
}

impl From<StatusRecord> for StatusInterval {
    fn from(record: StatusRecord) -> Self {
        StatusInterval {
            start: record.interval.start,
            end: record.interval.end,
            department: record.department,
            status: record.status,
        }
    }
}
