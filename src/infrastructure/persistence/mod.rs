pub mod file_sink;
pub mod result_log;
pub mod target_registry;

pub use file_sink::TextFileSink;
pub use result_log::InMemoryResultLog;
pub use target_registry::InMemoryTargetRegistry;
