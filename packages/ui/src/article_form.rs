//! Editor form state.

use store::{Article, ArticleRequest, ArticleStatus};

/// Whether the editor creates a new article or updates an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(i64),
}

impl EditorMode {
    pub fn article_id(self) -> Option<i64> {
        match self {
            EditorMode::Create => None,
            EditorMode::Edit(id) => Some(id),
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            EditorMode::Create => "New Article",
            EditorMode::Edit(_) => "Edit Article",
        }
    }
}

/// Values currently typed into the editor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArticleForm {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub status: ArticleStatus,
}

impl ArticleForm {
    pub fn from_article(article: &Article) -> Self {
        let request = ArticleRequest::from(article);
        Self {
            title: request.title,
            summary: request.summary,
            content: request.content,
            status: request.status,
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("Title is required");
        }
        if self.content.trim().is_empty() {
            return Err("Content is required");
        }
        Ok(())
    }

    pub fn to_request(&self) -> ArticleRequest {
        ArticleRequest {
            title: self.title.trim().to_string(),
            content: self.content.clone(),
            summary: self.summary.trim().to_string(),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_defaults_to_published() {
        assert_eq!(ArticleForm::default().status, ArticleStatus::Published);
    }

    #[test]
    fn test_requires_title_and_content() {
        let mut form = ArticleForm::default();
        assert_eq!(form.validate(), Err("Title is required"));
        form.title = "T".to_string();
        assert_eq!(form.validate(), Err("Content is required"));
        form.content = "   ".to_string();
        assert_eq!(form.validate(), Err("Content is required"));
        form.content = "C".to_string();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_request_keeps_fields() {
        let form = ArticleForm {
            title: " T ".to_string(),
            summary: "S".to_string(),
            content: "line one\n  line two".to_string(),
            status: ArticleStatus::Published,
        };
        let request = form.to_request();
        assert_eq!(request.title, "T");
        assert_eq!(request.summary, "S");
        assert_eq!(request.content, "line one\n  line two");
        assert_eq!(request.status.as_i32(), 1);
    }

    #[test]
    fn test_prefill_from_article() {
        let article = Article {
            id: 3,
            title: "Existing".to_string(),
            content: "Body".to_string(),
            summary: None,
            status: ArticleStatus::Draft,
            view_count: 12,
            author_id: 1,
            author_name: "a".to_string(),
            created_at: None,
            updated_at: None,
        };
        let form = ArticleForm::from_article(&article);
        assert_eq!(form.title, "Existing");
        assert_eq!(form.summary, "");
        assert_eq!(form.status, ArticleStatus::Draft);
    }

    #[test]
    fn test_mode() {
        assert_eq!(EditorMode::Create.article_id(), None);
        assert_eq!(EditorMode::Edit(8).article_id(), Some(8));
        assert_eq!(EditorMode::Create.heading(), "New Article");
        assert_eq!(EditorMode::Edit(8).heading(), "Edit Article");
    }
}
