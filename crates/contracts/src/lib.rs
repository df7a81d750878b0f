pub mod enums;
pub mod shared;

pub use shared::error::PortalError;
