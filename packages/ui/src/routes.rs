use dioxus::prelude::*;

use crate::guard::RequireAuth;
use crate::views::{
    ArticleDetail, ArticleList, CreateArticle, EditArticle, Login, NotFound, Register, Shell,
};

/// Every client-side route. Everything inside `RequireAuth` needs a session.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(RequireAuth)]
        #[layout(Shell)]
            #[route("/")]
            ArticleList {},
            #[route("/create-article")]
            CreateArticle {},
            #[route("/edit-article/:id")]
            EditArticle { id: i64 },
            #[route("/articles/:id")]
            ArticleDetail { id: i64 },
        #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
