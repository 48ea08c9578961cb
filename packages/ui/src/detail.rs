//! Which article the detail page is showing.

use store::Article;

/// Route id plus the article fetched for it.
///
/// Switching to another id drops the shown article, so nothing from the old
/// one (edit and delete included) stays on screen while the new one loads.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailState {
    id: i64,
    article: Option<Article>,
    loading: bool,
}

impl DetailState {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            article: None,
            loading: true,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Point at `id`. Returns whether it differed from the current one.
    pub fn follow(&mut self, id: i64) -> bool {
        if self.id == id {
            return false;
        }
        *self = Self::new(id);
        true
    }

    /// Store a fetched article. A late answer for another id is dropped.
    pub fn loaded(&mut self, article: Article) {
        if article.id == self.id {
            self.article = Some(article);
            self.loading = false;
        }
    }

    pub fn failed(&mut self) {
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn article(&self) -> Option<&Article> {
        self.article.as_ref()
    }
}
