use crate::model::{Id, author::Author, category::Category};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

pub const PUBLISHED_LABEL_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:long] [day padding:none], [year]");

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct PostMarker;

/// A single authored item of the fixed source collection. Category order
/// and duplicates are preserved as supplied.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct Post {
    pub id: Id<PostMarker>,
    pub author: Author,
    pub title: String,
    pub summary: String,
    pub published: Date,
    pub categories: Vec<Category>,
}

impl Post {
    /// The publish date as a long calendar string, e.g. "January 5, 2026".
    #[must_use]
    pub fn published_label(&self) -> String {
        self.published
            .format(PUBLISHED_LABEL_FORMAT)
            .expect("Format description only uses date components.")
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{
        Id,
        author::{Author, AuthorName},
        post::Post,
    };
    use time::macros::date;

    #[test]
    fn published_label_long_form() {
        let post = Post {
            id: Id::new(1),
            author: Author {
                name: AuthorName::new(String::from("Maya Lindqvist")).unwrap(),
                avatar: String::from("https://example.com/avatars/maya.png"),
            },
            title: String::from("Hello"),
            summary: String::from("First post"),
            published: date!(2026 - 01 - 05),
            categories: Vec::new(),
        };

        assert_eq!(post.published_label(), "January 5, 2026");
    }
}
