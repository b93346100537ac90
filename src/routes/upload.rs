//! Image upload endpoint and the naming scheme for stored files.
//!
//! A single multipart field named `image` is accepted. The file must pass an
//! extension and MIME allow-list and fit in 10 MiB. Stored files are named
//! `<millis>-<random>.<ext>` and served back under `/uploads/`.

use std::path::Path as FilePath;

use axum::{
    Json,
    extract::{Multipart, State},
};
use rand::Rng;
use serde_json::{Value, json};
use tracing::info;

use crate::{errors::Error, middleware::auth::AdminSession, state::AppState};

/// Upload size cap, also enforced as the router-wide body limit.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// File types accepted by the upload endpoint, matched against both the file
/// extension and the MIME subtype.
pub const ALLOWED_IMAGE_TYPES: [&str; 5] = ["jpeg", "jpg", "png", "gif", "webp"];

fn extension_of(file_name: &str) -> Option<String> {
    FilePath::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}

fn mime_subtype(content_type: &str) -> Option<&str> {
    content_type.strip_prefix("image/")
}

/// Builds the stored file name: current time in millis, a random suffix, and
/// the original extension.
fn stored_file_name(extension: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
    format!("{millis}-{suffix}.{extension}")
}

/// `POST /api/upload` - store one image, admin only. Answers with the
/// relative URL the file is served from.
pub async fn upload_image(
    State(state): State<AppState>,
    _session: AdminSession,
    mut multipart: Multipart,
) -> Result<Json<Value>, Error> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| Error::validation("Invalid upload"))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();

        let extension = extension_of(&original_name)
            .filter(|ext| ALLOWED_IMAGE_TYPES.contains(&ext.as_str()));
        let subtype = mime_subtype(&content_type)
            .filter(|sub| ALLOWED_IMAGE_TYPES.contains(sub));
        let (Some(extension), Some(_)) = (extension, subtype) else {
            return Err(Error::validation("Invalid file type"));
        };

        let data = field
            .bytes()
            .await
            .map_err(|_| Error::validation("File too large"))?;
        if data.len() > MAX_UPLOAD_BYTES {
            return Err(Error::validation("File too large"));
        }

        let file_name = stored_file_name(&extension);
        let destination = FilePath::new(&state.config.upload_dir).join(&file_name);

        tokio::fs::create_dir_all(&state.config.upload_dir).await?;
        tokio::fs::write(&destination, &data).await?;

        info!(
            "Stored upload '{}' as {} ({} bytes)",
            original_name,
            file_name,
            data.len()
        );
        return Ok(Json(json!({ "url": format!("/uploads/{file_name}") })));
    }

    Err(Error::validation("No file uploaded"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use crate::errors::Result;
    use crate::test_utils::{login_token, response_json, setup_test_app};
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use tower::ServiceExt;

    const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

    fn multipart_upload(
        token: &str,
        field_name: &str,
        file_name: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; \
                 name=\"{field_name}\"; filename=\"{file_name}\"\r\n\
                 Content-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_upload_and_retrieve() -> Result<()> {
        let (app, _db) = setup_test_app().await?;
        let token = login_token(&app).await?;

        let pixels = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 1, 2, 3];
        let res = app
            .clone()
            .oneshot(multipart_upload(
                &token, "image", "logo.png", "image/png", &pixels,
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let url = response_json(res).await["url"].as_str().unwrap().to_string();
        assert!(url.starts_with("/uploads/"));
        assert!(url.ends_with(".png"));

        // The stored file is served back as a static asset
        let res = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(&url)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let served = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(served.as_ref(), pixels);

        Ok(())
    }

    #[tokio::test]
    async fn test_upload_rejects_disallowed_type() -> Result<()> {
        let (app, _db) = setup_test_app().await?;
        let token = login_token(&app).await?;

        // Wrong extension
        let res = app
            .clone()
            .oneshot(multipart_upload(
                &token,
                "image",
                "script.exe",
                "image/png",
                b"MZ",
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        // Wrong MIME type
        let res = app
            .clone()
            .oneshot(multipart_upload(
                &token,
                "image",
                "notes.png",
                "text/plain",
                b"hello",
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    async fn test_upload_without_image_field() -> Result<()> {
        let (app, _db) = setup_test_app().await?;
        let token = login_token(&app).await?;

        let res = app
            .clone()
            .oneshot(multipart_upload(
                &token,
                "attachment",
                "logo.png",
                "image/png",
                b"data",
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response_json(res).await["error"], "No file uploaded");

        Ok(())
    }
}
