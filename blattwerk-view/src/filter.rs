use blattwerk_common::model::{author::AuthorName, post::Post};

/// The active author selection. A cleared selection and the explicit
/// "Show All" option are the same state.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash)]
pub enum AuthorFilter {
    #[default]
    All,
    Name(AuthorName),
}

impl AuthorFilter {
    /// Maps a selection-widget value to a filter. The empty value is the
    /// "Show All" sentinel and clears the filter.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match AuthorName::new(value.to_owned()) {
            Ok(name) => Self::Name(name),
            Err(_) => Self::All,
        }
    }

    #[must_use]
    pub fn matches(&self, post: &Post) -> bool {
        match self {
            Self::All => true,
            Self::Name(name) => post.author.name == *name,
        }
    }
}
