// src/presentation/http/openapi.rs
use crate::application::dto::{PaginatedResult, PostDto};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Documented shape of a posts page.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PostPageResponse {
    pub items: Vec<PostDto>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl From<PaginatedResult<PostDto>> for PostPageResponse {
    fn from(page: PaginatedResult<PostDto>) -> Self {
        Self {
            items: page.items,
            total: page.total,
            page: page.page,
            page_size: page.page_size,
            total_pages: page.total_pages,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::users::register,
        crate::presentation::http::controllers::users::login,
        crate::presentation::http::controllers::users::profile,
        crate::presentation::http::controllers::posts::list_posts,
        crate::presentation::http::controllers::posts::get_post,
        crate::presentation::http::controllers::posts::create_post,
        crate::presentation::http::controllers::posts::update_post,
        crate::presentation::http::controllers::posts::delete_post,
        crate::presentation::http::controllers::comments::create_comment,
        crate::presentation::http::controllers::comments::list_post_comments,
        crate::presentation::http::controllers::comments::get_comment,
        crate::presentation::http::controllers::comments::edit_comment,
        crate::presentation::http::controllers::comments::delete_comment,
        crate::presentation::http::controllers::comments::restore_comment,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            MessageResponse,
            PostPageResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::users::RegisterRequest,
            crate::presentation::http::controllers::users::LoginRequest,
            crate::presentation::http::controllers::users::LoginResponse,
            crate::presentation::http::controllers::posts::CreatePostRequest,
            crate::presentation::http::controllers::posts::UpdatePostRequest,
            crate::presentation::http::controllers::comments::CreateCommentRequest,
            crate::presentation::http::controllers::comments::EditCommentRequest,
            crate::application::dto::UserDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::PostDto,
            crate::application::dto::CommentDto
        )
    ),
    tags(
        (name = "Users", description = "Registration, login and profile"),
        (name = "Posts", description = "Blog posts"),
        (name = "Comments", description = "Threaded comments with soft delete and restore"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Blog API",
        description = "Blogging backend with threaded comments",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            return;
        }

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();
        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the OpenAPI document to `OPENAPI_SNAPSHOT_PATH` (default
/// `spec/openapi.json`) and returns the path written.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
