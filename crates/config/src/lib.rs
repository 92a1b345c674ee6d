mod base_path;
mod config;
mod profile;
mod site;

pub use self::base_path::*;
pub use self::config::*;
pub use self::profile::*;
pub use self::site::*;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
