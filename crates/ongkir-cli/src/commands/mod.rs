//! Command implementations.

pub mod areas;
pub mod check;
pub mod distance;
pub mod init_config;
pub mod resolve;
pub mod suggest;
pub mod validate;

pub use self::areas::execute_areas;
pub use self::check::execute_check;
pub use self::distance::execute_distance;
pub use self::init_config::execute_init_config;
pub use self::resolve::execute_resolve;
pub use self::suggest::execute_suggest;
pub use self::validate::execute_validate;
