pub mod common;
pub mod role;
pub mod transaction;
pub mod user;
pub mod user_role;
pub mod wallet;

pub use common::{CommandResponse, PageParams, Paged};
pub use role::RoleType;
