pub mod notify;
pub mod pass;
