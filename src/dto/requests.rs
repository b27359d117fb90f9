use serde::Deserialize;

/// Body of `POST /`. A missing field reads as empty content.
#[derive(Debug, Default, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub content: String,
}
