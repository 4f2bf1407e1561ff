use crate::UserDto;

use serde::Serialize;

/// Register/login body. `token` is only present under the bearer carrier.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
