//! Infrastructure adapters implementing the domain ports

pub mod file_logger;
pub mod memory_logger;

pub use file_logger::FileLogger;
pub use memory_logger::MemoryLogger;
