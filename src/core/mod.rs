pub mod add;
pub mod del;
pub mod math;
pub mod timer;
