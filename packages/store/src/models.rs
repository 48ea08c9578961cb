//! # Domain models exchanged with the blog backend
//!
//! Every type here mirrors a JSON payload of the REST API. The backend speaks
//! camelCase, so the structs rename their fields on the wire while keeping
//! snake_case in Rust.
//!
//! | Type | Payload |
//! |------|---------|
//! | [`User`] | The user fields of a login response, also the persisted session user. |
//! | [`Session`] | Token plus user, as returned by `POST /auth/login` (token flattened next to the user fields). |
//! | [`Article`] | One article as returned by `GET /articles/{id}`. |
//! | [`ArticleStatus`] | Draft (`0`) or Published (`1`), always an integer on the wire. |
//! | [`ArticleRequest`] | Body of `POST /articles` and `PUT /articles/{id}`. |
//! | [`ArticlePage`] | One page of `GET /articles?page=&size=`. |
//! | [`LoginRequest`] / [`RegisterRequest`] | Bodies of the auth endpoints. |

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Number of characters of content shown on a list card when an article has no summary.
pub const EXCERPT_CHARS: usize = 150;

/// An authenticated user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub email: String,
}

impl User {
    /// Nickname when set, otherwise the username.
    pub fn display_name(&self) -> &str {
        match self.nickname.as_deref() {
            Some(nick) if !nick.trim().is_empty() => nick,
            _ => &self.username,
        }
    }
}

/// The client-held pair of authenticated user and credential token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(flatten)]
    pub user: User,
}

impl Session {
    pub fn new(user: User, token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}

/// Publication state of an article.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum ArticleStatus {
    Draft,
    #[default]
    Published,
}

impl ArticleStatus {
    pub const ALL: [ArticleStatus; 2] = [ArticleStatus::Draft, ArticleStatus::Published];

    pub fn as_i32(self) -> i32 {
        match self {
            ArticleStatus::Draft => 0,
            ArticleStatus::Published => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ArticleStatus::Draft => "Draft",
            ArticleStatus::Published => "Published",
        }
    }

    /// Parse the value of a `<select>` option. Anything unparseable is a draft.
    pub fn from_form_value(value: &str) -> Self {
        value.trim().parse::<i32>().map(Self::from).unwrap_or(Self::Draft)
    }
}

impl From<i32> for ArticleStatus {
    fn from(value: i32) -> Self {
        match value {
            1 => ArticleStatus::Published,
            _ => ArticleStatus::Draft,
        }
    }
}

impl From<ArticleStatus> for i32 {
    fn from(status: ArticleStatus) -> Self {
        status.as_i32()
    }
}

/// A blog article as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub status: ArticleStatus,
    #[serde(default)]
    pub view_count: u64,
    pub author_id: i64,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Article {
    /// Text shown on list cards: the summary, or the head of the content.
    pub fn excerpt(&self) -> String {
        match self.summary.as_deref() {
            Some(summary) if !summary.trim().is_empty() => format!("{summary}..."),
            _ => {
                let head: String = self.content.chars().take(EXCERPT_CHARS).collect();
                format!("{head}...")
            }
        }
    }

    /// Whether `user_id` wrote this article.
    pub fn is_authored_by(&self, user_id: i64) -> bool {
        self.author_id == user_id
    }

    /// Creation date rendered with a `chrono` format string, empty when unknown.
    pub fn created_on(&self, fmt: &str) -> String {
        self.created_at
            .map(|at| at.format(fmt).to_string())
            .unwrap_or_default()
    }
}

/// Fields of an article the author can set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleRequest {
    pub title: String,
    pub content: String,
    pub summary: String,
    pub status: ArticleStatus,
}

impl From<&Article> for ArticleRequest {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            content: article.content.clone(),
            summary: article.summary.clone().unwrap_or_default(),
            status: article.status,
        }
    }
}

/// One page of the article collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePage {
    pub articles: Vec<Article>,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub total_pages: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub nickname: String,
    pub password: String,
}
