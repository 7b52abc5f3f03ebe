pub mod utils;

pub use utils::safe_ops::{safe_op, safe_test, try_safe_op, try_safe_test, SafeOption};
