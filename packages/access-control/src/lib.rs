mod pause;
mod roles;

pub use pause::{Pausable, PauseError, PausedResponse};
pub use roles::{
    AuthorizationPolicy, HasRoleResponse, RoleError, Roles, ADMIN_ROLE, DEFAULT_ADMIN_ROLE,
    MINTER_ROLE,
};
