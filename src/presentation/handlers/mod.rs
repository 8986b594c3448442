mod error_response;
mod health;
mod parse;
mod send_eth;
mod transcribe;

pub use error_response::{ErrorResponse, InputError};
pub use health::health_handler;
pub use parse::parse_handler;
pub use send_eth::send_eth_handler;
pub use transcribe::transcribe_handler;
