pub mod dimensions;
pub mod media_service;
pub mod storage;
