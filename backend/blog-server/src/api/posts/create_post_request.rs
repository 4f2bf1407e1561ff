use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub text: Option<String>,
    /// Defaults to no tags
    pub tags: Option<Vec<String>>,
    /// Defaults to true
    pub published: Option<bool>,
}
