pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod request_logging;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{is_auth, login, logout, me, register, update_me},
        auth_response::AuthResponse,
        is_auth_response::IsAuthResponse,
        login_request::LoginRequest,
        register_request::RegisterRequest,
        update_profile_request::UpdateProfileRequest,
        user_dto::UserDto,
        user_response::UserResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::{
        current_user::{CurrentUser, MaybeUser},
        json_body::JsonBody,
    },
    message_response::MessageResponse,
    posts::{
        create_post_request::CreatePostRequest,
        post_dto::{PostAuthorDto, PostDto},
        post_list_response::PostListResponse,
        post_response::PostResponse,
        posts::{create_post, delete_post, get_post, list_posts, update_post},
        update_post_request::UpdatePostRequest,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};

pub use crate::routes::build_router;
