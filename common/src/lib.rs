pub mod buffer2;
pub mod buffer3;
pub mod log_setup;
pub mod parallel;

pub use buffer2::Buffer2;
pub use buffer3::Buffer3;
