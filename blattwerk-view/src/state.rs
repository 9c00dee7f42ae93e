use crate::{
    catalog::Catalog,
    filter::AuthorFilter,
    page::{self, POSTS_PER_PAGE},
};
use blattwerk_common::model::post::Post;

/// The two pieces of view state the user can change. Everything shown is
/// recomputed from these and the catalog by [`ViewState::view`].
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash)]
pub struct ViewState {
    filter: AuthorFilter,
    current_page: usize,
}

/// Everything the presentation layer needs after a recompute.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct PageView<'a> {
    pub posts: Vec<&'a Post>,
    pub page_count: usize,
    pub show_pagination: bool,
    pub matching: usize,
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn filter(&self) -> &AuthorFilter {
        &self.filter
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Applies an author selection. `None` (a cleared selection) and the
    /// empty "Show All" value both clear the filter. Selecting always
    /// returns to the first page: a page offset kept from the previous,
    /// differently-sized result set must never be shown.
    pub fn select_author(&mut self, selection: Option<&str>) {
        self.filter = selection.map_or(AuthorFilter::All, AuthorFilter::from_value);
        self.current_page = 0;
    }

    /// Applies a page selection. The pagination control only offers
    /// indices in `[0, page_count)`, so the index is stored as-is.
    pub fn select_page(&mut self, page: usize) {
        self.current_page = page;
    }

    #[must_use]
    pub fn view<'a>(&self, catalog: &'a Catalog) -> PageView<'a> {
        let filtered = catalog.filtered(&self.filter);
        let posts = page::page_slice(&filtered, self.current_page, POSTS_PER_PAGE).to_vec();

        PageView {
            posts,
            page_count: page::page_count(filtered.len(), POSTS_PER_PAGE),
            show_pagination: page::shows_pagination(filtered.len(), POSTS_PER_PAGE),
            matching: filtered.len(),
        }
    }
}
