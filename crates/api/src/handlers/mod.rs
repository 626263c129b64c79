pub mod readings;
pub mod valve;
