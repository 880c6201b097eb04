pub mod gateway;
pub mod ingest;
pub mod storage;
