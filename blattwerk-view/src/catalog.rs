use crate::filter::AuthorFilter;
use blattwerk_common::model::post::Post;
use std::collections::HashSet;

pub const SHOW_ALL_VALUE: &str = "";
pub const SHOW_ALL_LABEL: &str = "Show All";

/// A selectable filter value paired with its display label.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct AuthorOption {
    pub value: String,
    pub label: String,
}

impl AuthorOption {
    #[must_use]
    pub fn show_all() -> Self {
        Self {
            value: SHOW_ALL_VALUE.to_owned(),
            label: SHOW_ALL_LABEL.to_owned(),
        }
    }

    #[must_use]
    pub fn is_show_all(&self) -> bool {
        self.value == SHOW_ALL_VALUE
    }
}

/// The immutable source collection of posts.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash)]
pub struct Catalog {
    posts: Vec<Post>,
}

impl Catalog {
    #[must_use]
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// One option per distinct author, in first-appearance order, with the
    /// "Show All" sentinel always first.
    #[must_use]
    pub fn author_options(&self) -> Vec<AuthorOption> {
        let mut options = vec![AuthorOption::show_all()];
        let mut seen = HashSet::new();

        for post in &self.posts {
            let name = &post.author.name;
            if seen.insert(name) {
                options.push(AuthorOption {
                    value: name.get().to_owned(),
                    label: name.get().to_owned(),
                });
            }
        }

        options
    }

    /// The subsequence of posts matching `filter`, source order preserved.
    #[must_use]
    pub fn filtered(&self, filter: &AuthorFilter) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|post| filter.matches(post))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        catalog::{AuthorOption, Catalog, SHOW_ALL_LABEL, SHOW_ALL_VALUE},
        filter::AuthorFilter,
    };
    use blattwerk_common::model::{
        Id,
        author::{Author, AuthorName},
        post::Post,
    };
    use std::collections::HashSet;
    use time::macros::date;

    fn post(id: u64, author: &str) -> Post {
        Post {
            id: Id::new(id),
            author: Author {
                name: AuthorName::new(author.to_owned()).unwrap(),
                avatar: format!("https://example.com/avatars/{id}.png"),
            },
            title: format!("Post {id}"),
            summary: String::from("A summary."),
            published: date!(2026 - 01 - 05),
            categories: Vec::new(),
        }
    }

    #[test]
    fn author_options_dedup_in_first_appearance_order() {
        let catalog = Catalog::new(vec![
            post(1, "Maya"),
            post(2, "Tom"),
            post(3, "Maya"),
            post(4, "Priya"),
            post(5, "Tom"),
        ]);

        let options = catalog.author_options();

        let labels: Vec<&str> = options.iter().map(|option| option.label.as_str()).collect();
        assert_eq!(labels, [SHOW_ALL_LABEL, "Maya", "Tom", "Priya"]);
        assert!(options[0].is_show_all());

        let values: HashSet<&str> = options.iter().map(|option| option.value.as_str()).collect();
        assert_eq!(values.len(), options.len());
    }

    #[test]
    fn author_options_of_empty_catalog() {
        let catalog = Catalog::new(Vec::new());
        assert_eq!(catalog.author_options(), [AuthorOption::show_all()]);
    }

    #[test]
    fn show_all_option_has_empty_value() {
        let option = AuthorOption::show_all();
        assert_eq!(option.value, SHOW_ALL_VALUE);
        assert_eq!(option.label, SHOW_ALL_LABEL);
    }

    #[test]
    fn filtered_by_author_preserves_order() {
        let catalog = Catalog::new(vec![
            post(1, "Maya"),
            post(2, "Tom"),
            post(3, "Maya"),
            post(4, "Tom"),
        ]);

        let filtered = catalog.filtered(&AuthorFilter::from_value("Maya"));

        let ids: Vec<u64> = filtered.iter().map(|post| post.id.get()).collect();
        assert_eq!(ids, [1, 3]);
        assert!(
            filtered
                .iter()
                .all(|post| post.author.name.get() == "Maya")
        );
    }

    #[test]
    fn filtered_by_show_all_is_the_whole_collection() {
        let catalog = Catalog::new(vec![post(1, "Maya"), post(2, "Tom")]);

        let filtered = catalog.filtered(&AuthorFilter::All);

        let ids: Vec<u64> = filtered.iter().map(|post| post.id.get()).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn filtered_by_unknown_author_is_empty() {
        let catalog = Catalog::new(vec![post(1, "Maya")]);
        assert!(catalog.filtered(&AuthorFilter::from_value("Nobody")).is_empty());
    }
}
