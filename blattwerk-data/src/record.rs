use blattwerk_common::model::{
    Id, ModelValidationError,
    author::{Author, AuthorName},
    category::Category,
    post::Post,
};
use serde::Deserialize;
use thiserror::Error;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

pub const PUBLISHED_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("A record held an invalid model value: {0}")]
    Model(#[from] ModelValidationError),
    #[error("A record held an invalid publish date: {0}")]
    Date(#[from] time::error::Parse),
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize)]
pub struct AuthorRecord {
    pub name: String,
    pub avatar: String,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize)]
pub struct CategoryRecord {
    pub id: u64,
    pub name: String,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize)]
pub struct PostRecord {
    pub id: u64,
    pub author: AuthorRecord,
    pub title: String,
    pub summary: String,
    pub published: String,
    pub categories: Vec<CategoryRecord>,
}

impl TryFrom<AuthorRecord> for Author {
    type Error = RecordError;

    fn try_from(value: AuthorRecord) -> Result<Self, Self::Error> {
        let name = AuthorName::new(value.name).map_err(ModelValidationError::from)?;

        Ok(Self {
            name,
            avatar: value.avatar,
        })
    }
}

impl From<CategoryRecord> for Category {
    fn from(value: CategoryRecord) -> Self {
        Self {
            id: Id::new(value.id),
            name: value.name,
        }
    }
}

impl TryFrom<PostRecord> for Post {
    type Error = RecordError;

    fn try_from(value: PostRecord) -> Result<Self, Self::Error> {
        let published = Date::parse(&value.published, PUBLISHED_FORMAT)?;

        Ok(Self {
            id: Id::new(value.id),
            author: Author::try_from(value.author)?,
            title: value.title,
            summary: value.summary,
            published,
            categories: value.categories.into_iter().map(Category::from).collect(),
        })
    }
}
