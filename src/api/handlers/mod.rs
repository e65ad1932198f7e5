mod contact;
mod system;
mod telemetry;

#[cfg(test)]
mod system_test;

pub use contact::*;
pub use system::*;
pub use telemetry::*;
