pub mod attendance;
pub mod school;
pub mod staff;

pub use attendance::{AttendanceRecord, HistoryEntry};
pub use school::SchoolInfo;
pub use staff::{StaffMember, StaffRow};
