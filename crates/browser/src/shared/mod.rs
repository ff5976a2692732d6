pub mod config;
pub mod errors;
pub mod js;

pub use config::WaitConfig;
pub use errors::{is_unreachable, to_check_error};
