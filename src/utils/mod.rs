pub mod logger;
pub mod safe_ops;
