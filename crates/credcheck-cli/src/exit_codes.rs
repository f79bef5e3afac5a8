//! Process exit codes. These are part of the public contract.

pub const SUCCESS: i32 = 0;
pub const SCENARIO_FAILED: i32 = 1; // At least one scenario did not pass
pub const CONFIG_ERROR: i32 = 2; // Suite could not be loaded or registered

pub fn for_run(all_passed: bool) -> i32 {
    if all_passed {
        SUCCESS
    } else {
        SCENARIO_FAILED
    }
}
