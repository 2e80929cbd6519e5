//! Post handlers - CRUD over the shared post collection.

use actix_web::{HttpResponse, web};

use crate::middleware::body::PostBody;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.find_by_id(&path).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: PostBody,
) -> AppResult<HttpResponse> {
    let new_post = body.into_fields()?.into_new_post()?;
    let post = state.posts.create(new_post).await?;

    tracing::info!(post_id = %post.id, author = %post.author, "Created post");
    Ok(HttpResponse::Ok().json(post))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: PostBody,
) -> AppResult<HttpResponse> {
    // An unknown id is reported whatever the body holds
    state.posts.find_by_id(&path).await?;

    let post = state.posts.update(&path, body.into_fields()?).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.delete(&path).await?;

    tracing::info!(post_id = %post.id, "Deleted post");
    Ok(HttpResponse::Ok().json(post))
}
