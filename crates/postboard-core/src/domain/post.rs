use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::DomainError;

/// Post entity - an author-attributed piece of content with an optional picture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author: String,
    pub age: Number,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

/// The optional field set carried by create and update requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostFields {
    pub author: Option<String>,
    pub age: Option<Number>,
    pub content: Option<String>,
    pub picture: Option<String>,
}

/// A post that passed creation checks but has no id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub author: String,
    pub age: Number,
    pub content: String,
    pub picture: Option<String>,
}

impl PostFields {
    /// Require author, age and content to be present and truthy.
    ///
    /// The picture is taken as given, even when empty.
    pub fn into_new_post(self) -> Result<NewPost, DomainError> {
        match (
            truthy_str(self.author),
            truthy_number(self.age),
            truthy_str(self.content),
        ) {
            (Some(author), Some(age), Some(content)) => Ok(NewPost {
                author,
                age,
                content,
                picture: self.picture,
            }),
            _ => Err(DomainError::missing_required_fields()),
        }
    }
}

impl Post {
    /// Build a stored post from validated input.
    pub fn from_new(id: String, new_post: NewPost) -> Self {
        Self {
            id,
            author: new_post.author,
            age: new_post.age,
            content: new_post.content,
            picture: new_post.picture,
        }
    }

    /// Overwrite each field for which `fields` carries a truthy value.
    ///
    /// Empty strings and a zero age count as "not supplied", so they can
    /// never clear or zero an existing value.
    pub fn merge(&mut self, fields: PostFields) {
        if let Some(author) = truthy_str(fields.author) {
            self.author = author;
        }
        if let Some(age) = truthy_number(fields.age) {
            self.age = age;
        }
        if let Some(content) = truthy_str(fields.content) {
            self.content = content;
        }
        if let Some(picture) = truthy_str(fields.picture) {
            self.picture = Some(picture);
        }
    }
}

fn truthy_str(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn truthy_number(value: Option<Number>) -> Option<Number> {
    value.filter(|n| n.as_f64().is_none_or(|v| v != 0.0))
}
