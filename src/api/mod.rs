//! Внешний API парсера колод.
//!
//! Здесь описываются:
//! - команды (commands.rs) — разобрать колоду, собрать набор колод;
//! - DTO (dto.rs) — удобные структуры для фронта;
//! - ошибки (errors.rs) — то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;

pub use commands::*;
pub use dto::*;
pub use errors::*;
