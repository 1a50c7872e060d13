pub mod aggregate;

pub use aggregate::Wave;
