//! Article CRUD.

use reqwest::Method;
use store::{Article, ArticlePage, ArticleRequest};

use crate::client::decode_optional;
use crate::error::{ApiError, Endpoint};
use crate::ApiClient;

impl ApiClient {
    /// Fetch page `page` (zero-indexed) of published articles.
    pub async fn list_articles(&self, page: u32, size: u32) -> Result<ArticlePage, ApiError> {
        let path = format!("/articles?page={page}&size={size}");
        let response = self
            .send(Endpoint::ListArticles, self.request(Method::GET, &path))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn get_article(&self, id: i64) -> Result<Article, ApiError> {
        let path = format!("/articles/{id}");
        let response = self
            .send(Endpoint::GetArticle, self.request(Method::GET, &path))
            .await?;
        Ok(response.json().await?)
    }

    /// Any 2xx is success. The saved article comes back only when the
    /// backend echoes it; the reference backend answers with a message.
    pub async fn create_article(
        &self,
        request: &ArticleRequest,
    ) -> Result<Option<Article>, ApiError> {
        let builder = self.request(Method::POST, "/articles").json(request);
        let response = self.send(Endpoint::CreateArticle, builder).await?;
        decode_optional(response).await
    }

    /// Only the author may update; anyone else gets [`ApiError::Forbidden`].
    pub async fn update_article(
        &self,
        id: i64,
        request: &ArticleRequest,
    ) -> Result<Option<Article>, ApiError> {
        let path = format!("/articles/{id}");
        let builder = self.request(Method::PUT, &path).json(request);
        let response = self.send(Endpoint::UpdateArticle, builder).await?;
        decode_optional(response).await
    }

    pub async fn delete_article(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("/articles/{id}");
        self.send(Endpoint::DeleteArticle, self.request(Method::DELETE, &path))
            .await?;
        Ok(())
    }
}
