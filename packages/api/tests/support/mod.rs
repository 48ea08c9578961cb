//! In-memory stand-in for the blog backend, served through wiremock.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use api::ApiClient;
use serde_json::{json, Value};
use store::{Article, ArticleStatus, MemoryStore, SessionStore, User};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const API_PREFIX: &str = "/api";

struct Account {
    user: User,
    password: String,
}

#[derive(Default)]
struct State {
    accounts: Vec<Account>,
    articles: Vec<Article>,
    next_user_id: i64,
    next_article_id: i64,
}

/// Stateful fake of the REST API. Clones share state.
#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<State>>,
}

impl FakeBackend {
    pub async fn start() -> (MockServer, FakeBackend) {
        let server = MockServer::start().await;
        let backend = FakeBackend::default();
        Mock::given(any())
            .respond_with(backend.clone())
            .mount(&server)
            .await;
        (server, backend)
    }

    pub fn add_user(&self, username: &str, password: &str) -> User {
        let mut state = self.state.lock().unwrap();
        state.next_user_id += 1;
        let user = User {
            id: state.next_user_id,
            username: username.to_string(),
            nickname: None,
            email: format!("{username}@example.com"),
        };
        state.accounts.push(Account {
            user: user.clone(),
            password: password.to_string(),
        });
        user
    }

    pub fn seed_articles(&self, author: &User, count: usize) -> Vec<i64> {
        (0..count)
            .map(|n| {
                self.insert_article(
                    author,
                    json!({
                        "title": format!("Article {n}"),
                        "content": format!("Body {n}"),
                        "summary": "",
                        "status": 1,
                    }),
                )
                .id
            })
            .collect()
    }

    pub fn article_ids(&self) -> Vec<i64> {
        self.state.lock().unwrap().articles.iter().map(|a| a.id).collect()
    }

    /// Id of the most recently stored article.
    pub fn last_article_id(&self) -> Option<i64> {
        self.state.lock().unwrap().articles.last().map(|a| a.id)
    }

    fn insert_article(&self, author: &User, body: Value) -> Article {
        let mut state = self.state.lock().unwrap();
        state.next_article_id += 1;
        let article = Article {
            id: state.next_article_id,
            title: body["title"].as_str().unwrap_or_default().to_string(),
            content: body["content"].as_str().unwrap_or_default().to_string(),
            summary: body["summary"].as_str().map(str::to_string),
            status: ArticleStatus::from(body["status"].as_i64().unwrap_or(0) as i32),
            view_count: 0,
            author_id: author.id,
            author_name: author.display_name().to_string(),
            created_at: None,
            updated_at: None,
        };
        state.articles.push(article.clone());
        article
    }

    fn token_for(user: &User) -> String {
        format!("token-{}", user.id)
    }

    fn caller(&self, request: &Request) -> Option<User> {
        let token = request
            .headers
            .get("authorization")?
            .to_str()
            .ok()?
            .strip_prefix("Bearer ")?
            .to_string();
        let state = self.state.lock().unwrap();
        state
            .accounts
            .iter()
            .find(|a| Self::token_for(&a.user) == token)
            .map(|a| a.user.clone())
    }

    fn login(&self, body: Value) -> ResponseTemplate {
        let state = self.state.lock().unwrap();
        let found = state.accounts.iter().find(|a| {
            body["username"].as_str() == Some(a.user.username.as_str())
                && body["password"].as_str() == Some(a.password.as_str())
        });
        match found {
            Some(account) => {
                let mut payload = serde_json::to_value(&account.user).unwrap();
                payload["token"] = json!(Self::token_for(&account.user));
                payload["type"] = json!("Bearer");
                ResponseTemplate::new(200).set_body_json(payload)
            }
            None => message(401, "Bad credentials"),
        }
    }

    fn register(&self, body: Value) -> ResponseTemplate {
        let username = body["username"].as_str().unwrap_or_default();
        if username.is_empty() {
            return message(400, "Error: Username is required!");
        }
        let taken = {
            let state = self.state.lock().unwrap();
            state.accounts.iter().any(|a| a.user.username == username)
        };
        if taken {
            return message(400, "Error: Username is already taken!");
        }
        let password = body["password"].as_str().unwrap_or_default();
        self.add_user(username, password);
        message(200, "User registered successfully!")
    }

    fn list(&self, request: &Request) -> ResponseTemplate {
        let query = |name: &str| {
            request
                .url
                .query_pairs()
                .find(|(k, _)| k == name)
                .and_then(|(_, v)| v.parse::<usize>().ok())
        };
        let page = query("page").unwrap_or(0);
        let size = query("size").unwrap_or(10).max(1);

        let state = self.state.lock().unwrap();
        let mut published: Vec<&Article> = state
            .articles
            .iter()
            .filter(|a| a.status == ArticleStatus::Published)
            .collect();
        published.sort_by(|a, b| b.id.cmp(&a.id));

        let total_items = published.len();
        let total_pages = total_items.div_ceil(size);
        let slice: Vec<&Article> = published.into_iter().skip(page * size).take(size).collect();

        ResponseTemplate::new(200).set_body_json(json!({
            "articles": slice,
            "currentPage": page,
            "totalItems": total_items,
            "totalPages": total_pages,
        }))
    }

    fn get(&self, id: i64) -> ResponseTemplate {
        let mut state = self.state.lock().unwrap();
        match state.articles.iter_mut().find(|a| a.id == id) {
            Some(article) => {
                article.view_count += 1;
                ResponseTemplate::new(200).set_body_json(&*article)
            }
            None => message(404, &format!("Article not found with id: {id}")),
        }
    }

    fn update(&self, caller: &User, id: i64, body: Value) -> ResponseTemplate {
        let mut state = self.state.lock().unwrap();
        let Some(article) = state.articles.iter_mut().find(|a| a.id == id) else {
            return message(404, &format!("Article not found with id: {id}"));
        };
        if article.author_id != caller.id {
            return message(400, "Error: You are not the author of this article!");
        }
        article.title = body["title"].as_str().unwrap_or_default().to_string();
        article.content = body["content"].as_str().unwrap_or_default().to_string();
        article.summary = body["summary"].as_str().map(str::to_string);
        article.status = ArticleStatus::from(body["status"].as_i64().unwrap_or(0) as i32);
        message(200, "Article updated successfully!")
    }

    fn delete(&self, caller: &User, id: i64) -> ResponseTemplate {
        let mut state = self.state.lock().unwrap();
        let Some(index) = state.articles.iter().position(|a| a.id == id) else {
            return message(404, &format!("Article not found with id: {id}"));
        };
        if state.articles[index].author_id != caller.id {
            return message(400, "Error: You are not the author of this article!");
        }
        state.articles.remove(index);
        message(200, "Article deleted successfully!")
    }
}

impl Respond for FakeBackend {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let Some(path) = request.url.path().strip_prefix(API_PREFIX) else {
            return message(404, "unknown path");
        };
        let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        let article_id = segments.get(1).and_then(|s| s.parse::<i64>().ok());

        match (request.method.as_str(), segments.as_slice()) {
            ("POST", ["auth", "login"]) => self.login(body),
            ("POST", ["auth", "register"]) => self.register(body),
            ("GET", ["articles"]) => self.list(request),
            ("GET", ["articles", _]) => match article_id {
                Some(id) => self.get(id),
                None => message(400, "bad id"),
            },
            (method @ ("POST" | "PUT" | "DELETE"), ["articles", ..]) => {
                let Some(caller) = self.caller(request) else {
                    return message(401, "Full authentication is required");
                };
                match (method, article_id) {
                    ("POST", None) => {
                        self.insert_article(&caller, body);
                        message(200, "Article created successfully!")
                    }
                    ("PUT", Some(id)) => self.update(&caller, id, body),
                    ("DELETE", Some(id)) => self.delete(&caller, id),
                    _ => message(400, "bad request"),
                }
            }
            _ => message(404, "unknown route"),
        }
    }
}

fn message(status: u16, text: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({ "message": text }))
}

/// A client pointed at `server` with a fresh, logged-out session.
pub fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(
        format!("{}{API_PREFIX}", server.uri()),
        SessionStore::init(MemoryStore::new()),
    )
}

/// Log `username` in through the API and store the session, as the login view does.
pub async fn logged_in(server: &MockServer, username: &str, password: &str) -> ApiClient {
    let client = client(server);
    let session = client.login(username, password).await.unwrap();
    let mut store = client.session().clone();
    store.set_auth(session.user, session.token);
    client
}
