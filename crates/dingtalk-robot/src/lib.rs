pub mod config;
pub mod error;
pub mod message;
pub mod response;
pub mod robot;
pub mod sign;

pub use config::RobotConfig;
pub use error::{ErrorKind, Result, RobotError};
pub use message::{ActionCard, At, Link, Markdown, Message, Text};
pub use response::SendResult;
pub use robot::Robot;
