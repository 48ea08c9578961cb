mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod shell;
pub use shell::Shell;

mod article_list;
pub use article_list::ArticleList;

mod article_detail;
pub use article_detail::ArticleDetail;

mod article_editor;
pub use article_editor::{ArticleEditor, CreateArticle, EditArticle};

mod confirm_dialog;
pub use confirm_dialog::{ConfirmDialog, ModalOverlay};

mod not_found;
pub use not_found::NotFound;
