use std::sync::Arc;
use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, Form, Multipart, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use crate::api::{ContactOutcome, PaletteKit, UploadRejection};
use crate::color::errors::PaletteResult;
use crate::decoder::file_extension;
use crate::export::ExportEntry;
use crate::notify::ContactSubmission;
use crate::view::{render_contact, render_home, HomeView};

/// Largest accepted request body
const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Deserialize)]
struct HomeQuery {
    error: Option<String>,
    detail: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContactQuery {
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExportRequest {
    colors: Option<Vec<ExportEntry>>,
}

#[derive(Debug, Serialize)]
struct ExportResponse {
    success: bool,
    message: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContactForm {
    firstname: String,
    lastname: String,
    email: String,
    message: String,
}

/// Build the application router
pub fn router(kit: Arc<PaletteKit>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/upload", post(upload))
        .route("/uploads/:name", get(serve_upload))
        .route("/copy_colors", post(copy_colors))
        .route("/contact", get(contact_form).post(contact_submit))
        .route("/healthz", get(|| async { "ok" }))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(kit)
}

/// Listen on `bind_addr` and serve until the process stops
pub async fn serve(kit: Arc<PaletteKit>, bind_addr: &str) -> PaletteResult<()> {
    let app = router(kit);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Palette server listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn home(Query(query): Query<HomeQuery>) -> Html<String> {
    let message = query.error
        .as_deref()
        .and_then(|code| UploadRejection::message_for(code, query.detail.as_deref()));

    Html(render_home(&HomeView { message, ..HomeView::default() }))
}

fn reject(rejection: &UploadRejection) -> Response {
    let mut params = vec![("error", rejection.code())];
    if let Some(detail) = rejection.detail() {
        params.push(("detail", detail));
    }

    let query = serde_urlencoded::to_string(&params)
        .unwrap_or_else(|_| format!("error={}", rejection.code()));
    Redirect::to(&format!("/?{}", query)).into_response()
}

async fn upload(State(kit): State<Arc<PaletteKit>>, mut multipart: Multipart) -> Response {
    let mut filename: Option<String> = None;
    let mut bytes = Vec::new();

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some("image") {
                    continue;
                }
                filename = Some(field.file_name().unwrap_or_default().to_string());
                match field.bytes().await {
                    Ok(data) => bytes = data.to_vec(),
                    Err(e) => {
                        warn!("Failed to read uploaded file: {}", e);
                        return reject(&UploadRejection::Processing(e.to_string()));
                    }
                }
                break;
            },
            Ok(None) => break,
            Err(e) => {
                warn!("Malformed multipart request: {}", e);
                return reject(&UploadRejection::MissingFile);
            }
        }
    }

    let worker = kit.clone();
    let result = tokio::task::spawn_blocking(move || {
        worker.process_upload(filename.as_deref(), &bytes)
    }).await;

    match result {
        Ok(Ok(outcome)) => {
            let view = HomeView {
                image_url: Some(format!("/uploads/{}", outcome.stored_name)),
                colors: outcome.colors,
                message: None,
            };
            Html(render_home(&view)).into_response()
        },
        Ok(Err(rejection)) => reject(&rejection),
        Err(e) => {
            error!("Upload worker failed: {}", e);
            reject(&UploadRejection::Processing(e.to_string()))
        }
    }
}

fn content_type_for(name: &str) -> &'static str {
    match file_extension(name).as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

async fn serve_upload(State(kit): State<Arc<PaletteKit>>, Path(name): Path<String>) -> Response {
    let Some(path) = kit.uploads().path_for(&name) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type_for(&name))], bytes).into_response(),
        Err(e) => {
            warn!("Failed to read stored upload {}: {}", path.display(), e);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

fn export_reply(status: StatusCode, success: bool, message: impl Into<String>) -> (StatusCode, Json<ExportResponse>) {
    (status, Json(ExportResponse { success, message: message.into() }))
}

async fn copy_colors(
    State(kit): State<Arc<PaletteKit>>,
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> (StatusCode, Json<ExportResponse>) {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return export_reply(StatusCode::BAD_REQUEST, false, rejection.body_text()),
    };

    let colors = request.colors.unwrap_or_default();
    if colors.is_empty() {
        return export_reply(StatusCode::BAD_REQUEST, false, "No colors data provided");
    }

    match kit.export(&colors) {
        Ok(()) => export_reply(
            StatusCode::OK,
            true,
            format!("Color data has been exported to {}", kit.export_destination()),
        ),
        Err(e) => {
            error!("Export failed: {}", e);
            export_reply(StatusCode::INTERNAL_SERVER_ERROR, false, e.to_string())
        }
    }
}

async fn contact_form(Query(query): Query<ContactQuery>) -> Html<String> {
    let message = query.status
        .as_deref()
        .and_then(ContactOutcome::from_code)
        .map(|outcome| outcome.message());

    Html(render_contact(message))
}

async fn contact_submit(State(kit): State<Arc<PaletteKit>>, Form(form): Form<ContactForm>) -> Redirect {
    let submission = ContactSubmission::new(form.firstname, form.lastname, form.email, form.message);

    let outcome = tokio::task::spawn_blocking(move || kit.submit_contact(&submission))
        .await
        .unwrap_or_else(|e| {
            error!("Contact worker failed: {}", e);
            ContactOutcome::Failed
        });

    Redirect::to(&format!("/contact?status={}", outcome.code()))
}
