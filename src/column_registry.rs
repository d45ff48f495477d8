/// Centralized column naming for gait logs
///
/// Exoskeleton logs always carry the same 31 variables in the same order, so the
/// position of a name in `COLUMN_NAMES` is its column index in every loaded table.
/// Analysis and plotting code addresses columns by name only and goes through
/// `column_index`, which turns an unknown name into an error instead of an index.
use crate::error::GaitError;

/// Number of variables in a gait log row.
pub const COLUMN_COUNT: usize = 31;

/// Ordered variable names as they appear in the log layout.
pub const COLUMN_NAMES: [&str; COLUMN_COUNT] = [
    "state_time",      // 0
    "accelx",          // 1
    "accely",          // 2
    "accelz",          // 3
    "gyrox",           // 4
    "gyroy",           // 5
    "gyroz",           // 6
    "mot_ang",         // 7
    "mot_vel",         // 8
    "mot_acc",         // 9
    "mot_cur",         // 10
    "mot_volt",        // 11
    "batt_volt",       // 12
    "batt_curr",       // 13
    "temperature",     // 14
    "status_mn",       // 15
    "status_ex",       // 16
    "status_re",       // 17
    "ank_ang",         // 18
    "ank_vel",         // 19
    "ank_torque",      // 20
    "peak_ank_torque", // 21
    "step_energy",     // 22
    "step_count",      // 23
    "step_time",       // 24
    "gait_state",      // 25
    "movement",        // 26
    "speed",           // 27
    "incline",         // 28
    "sys_time",        // 29
    "event flags",     // 30
];

/// Column carrying the gait state machine; its rising zero-crossings are heelstrikes.
pub const GAIT_STATE: &str = "gait_state";

/// Get the 0-based column of a variable name.
///
/// # Returns
/// `None` when the name is not registered. Names match exactly (case-sensitive).
pub fn index_of(name: &str) -> Option<usize> {
    COLUMN_NAMES.iter().position(|&candidate| candidate == name)
}

/// Like `index_of`, but an unknown name is an error.
pub fn column_index(name: &str) -> Result<usize, GaitError> {
    index_of(name).ok_or_else(|| GaitError::UnknownVariable(name.to_string()))
}

/// Reverse lookup used for plot labels.
pub fn column_name(index: usize) -> Option<&'static str> {
    COLUMN_NAMES.get(index).copied()
}
