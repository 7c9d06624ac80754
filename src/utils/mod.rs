// Utils compartidos

pub mod constants;
pub mod format;
pub mod storage;
pub mod validator;

pub use constants::*;
pub use format::{format_date, format_status};
pub use storage::{load_json, save_json, MemoryStorage, SessionStorage};
pub use validator::{ExtensionValidator, FileValidator};
