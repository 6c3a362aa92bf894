//! every user-facing string, per language
use crate::config::options::Language;

/// a table of user-facing strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    /// shown while the post list is loading
    pub loading_posts: &'static str,
    /// shown while a single post is loading
    pub loading_post: &'static str,
    /// shown when the post list is empty (or failed to load)
    pub no_posts: &'static str,
    /// shown when a single post couldn't be loaded
    pub post_not_found: &'static str,
    /// label before the user id on a card
    pub user_id: &'static str,
    /// placeholder for a post without tags
    pub no_tag: &'static str,
    /// label before the post id on the detail screen
    pub post_id: &'static str,
    /// label before the user id on the detail screen
    pub user: &'static str,
    /// heading of the body section
    pub body_heading: &'static str,
    /// heading of the reactions/tags section
    pub extra_heading: &'static str,
    /// likes label
    pub likes: &'static str,
    /// dislikes label
    pub dislikes: &'static str,
    /// tags label
    pub tags: &'static str,
    /// title above the post list
    pub list_title: &'static str,
    /// prompt for picking a post
    pub select_post: &'static str,
    /// prompt on the detail screen
    pub detail_prompt: &'static str,
    /// go back a screen
    pub back: &'static str,
    /// fetch the list again
    pub reload: &'static str,
    /// quit
    pub exit: &'static str,
}

/// english strings
pub const ENGLISH: Messages = Messages {
    loading_posts: "Loading posts...",
    loading_post: "Loading post...",
    no_posts: "No posts found.",
    post_not_found: "Post not found.",
    user_id: "User ID:",
    no_tag: "No tag",
    post_id: "Post ID:",
    user: "User:",
    body_heading: "Post body:",
    extra_heading: "Additional data",
    likes: "Likes",
    dislikes: "Dislikes",
    tags: "Tags",
    list_title: "Posts",
    select_post: "Select a post to view:",
    detail_prompt: "What would you like to do?",
    back: "Back",
    reload: "Reload",
    exit: "Exit",
};

/// spanish strings
pub const SPANISH: Messages = Messages {
    loading_posts: "Cargando posts...",
    loading_post: "Cargando post...",
    no_posts: "No se encontraron posts.",
    post_not_found: "Post no encontrado.",
    user_id: "Usuario ID:",
    no_tag: "Sin Etiqueta",
    post_id: "Post ID:",
    user: "Usuario:",
    body_heading: "Cuerpo del Post:",
    extra_heading: "Datos Adicionales",
    likes: "Likes",
    dislikes: "Dislikes",
    tags: "Etiquetas",
    list_title: "Posts",
    select_post: "Selecciona un post:",
    detail_prompt: "¿Qué quieres hacer?",
    back: "Volver",
    reload: "Recargar",
    exit: "Salir",
};

impl Messages {
    /// the table for a language
    pub const fn for_language(lang: Language) -> &'static Messages {
        match lang {
            Language::English => &ENGLISH,
            Language::Spanish => &SPANISH,
        }
    }
}
