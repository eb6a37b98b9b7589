pub mod ingest;
pub mod shared;
pub mod solved_log;
