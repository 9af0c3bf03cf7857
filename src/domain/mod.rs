pub mod address;
pub mod error;
pub mod event;
pub mod layout;
pub mod params;

pub use address::{DEFAULT_PORT, ServerAddress};
pub use error::AppError;
pub use event::InstanceEvent;
pub use layout::{INSTANCE_DIRS, InstanceLayout};
pub use params::{InstanceParams, PACKAGE, PACKAGE_DISPLAY};
