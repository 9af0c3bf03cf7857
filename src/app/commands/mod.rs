pub mod create;
pub mod resolve;
