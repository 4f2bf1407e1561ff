use blog_core::ProfileChanges;

use serde::Deserialize;

/// Display attributes the owner may change. Other fields are ignored.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub avatar: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileChanges {
    fn from(req: UpdateProfileRequest) -> Self {
        ProfileChanges {
            username: req.username,
            avatar: req.avatar,
        }
    }
}
