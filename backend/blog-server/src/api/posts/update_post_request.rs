use blog_core::PostChanges;

use serde::Deserialize;

/// Editable post fields. The author cannot be reassigned; unknown fields
/// are ignored.
#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub text: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
}

impl From<UpdatePostRequest> for PostChanges {
    fn from(req: UpdatePostRequest) -> Self {
        PostChanges {
            title: req.title,
            text: req.text,
            tags: req.tags,
            published: req.published,
        }
    }
}
