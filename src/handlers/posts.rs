//! Post handlers
//!
//! The page itself, the post list as JSON, and the submission form.

use axum::{
    extract::State,
    response::{Html, Redirect},
    Form, Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::domain::entities::Post;
use crate::error::AppError;
use crate::page::render_page;
use crate::AppState;

/// GET /
///
/// The rendered chronicles page: post list plus submission form.
pub async fn get_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let posts = state.posts.load_posts().await?;
    Ok(Html(render_page(&posts)))
}

/// GET /posts
///
/// The current post list as JSON, newest first.
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, AppError> {
    let posts = state.posts.load_posts().await?;
    Ok(Json(posts))
}

/// Request body for POST /posts
#[derive(Deserialize)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub from: Option<String>,
}

/// POST /posts
///
/// Form submission. Fields are trimmed here; a blank title or content
/// means the add is simply not performed — the client is redirected back
/// with no error either way.
pub async fn create_post(
    State(state): State<AppState>,
    Form(form): Form<PostForm>,
) -> Result<Redirect, AppError> {
    let title = form.title.trim();
    let content = form.content.trim();
    if title.is_empty() || content.is_empty() {
        return Ok(Redirect::to("/"));
    }

    let from = form
        .from
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string);

    let post = Post {
        title: title.to_string(),
        content: content.to_string(),
        from,
        date: Utc::now().to_rfc3339(),
    };
    state.posts.add_post(post).await?;

    Ok(Redirect::to("/"))
}
