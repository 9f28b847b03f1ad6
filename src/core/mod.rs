pub mod codes;
pub mod engine;
pub mod export;
pub mod log;
pub mod logic;
pub mod month;
