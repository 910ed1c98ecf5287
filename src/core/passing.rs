//! Call-by-value versus call-by-reference

use tracing::trace;

/// Value `change` writes into its own copy
pub const CHANGED_VALUE: i32 = 5;

/// Receives a copy of the caller's value; the assignment stays local
pub fn change(mut data: i32) {
    trace!("change() received {}", data);
    data = CHANGED_VALUE;
    trace!("change() set its copy to {}", data);
}

/// Exchanges the caller's two values through mutable borrows
pub fn swap(x: &mut i32, y: &mut i32) {
    let temp = *x;
    *x = *y;
    *y = temp;
}
