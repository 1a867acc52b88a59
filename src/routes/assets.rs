use std::path::{Path, PathBuf};

use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::{HttpRequest, HttpResponse};
use crate::config::AssetSettings;

/// Body returned when the build was deployed without its entry document
pub const MISSING_INDEX_BODY: &str = "Application not properly deployed";

/// Body returned when the entry document exists but cannot be sent
pub const INDEX_FAILURE_BODY: &str = "Error loading application";

/// Fail fast when the asset directory is missing
pub fn ensure_asset_dir(dir: &Path) -> std::io::Result<()> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Static files directory not found: {}", dir.display()),
        ))
    }
}

/// Static file service for the built application.
///
/// Paths that do not name a file are answered with the entry document so
/// client-side routes survive a page reload.
pub fn static_files(assets: &AssetSettings) -> Files {
    let index_path = assets.index_path();

    Files::new("/", assets.dir.clone())
        .index_file(assets.index_file.clone())
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index_path = index_path.clone();
            async move {
                let (req, _) = req.into_parts();
                let res = serve_index(&req, &index_path).await;
                Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
            }
        }))
}

/// Send the entry document, or a plain-text error page if that fails
pub async fn serve_index(req: &HttpRequest, index_path: &Path) -> HttpResponse {
    tracing::debug!("Serving {} for {}", index_path.display(), req.path());

    match tokio::fs::metadata(index_path).await {
        Ok(meta) if meta.is_file() => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::error!("index.html not found at: {}", index_path.display());
            return HttpResponse::NotFound()
                .content_type("text/plain; charset=utf-8")
                .body(MISSING_INDEX_BODY);
        }
        Ok(_) => {
            tracing::error!("{} is not a regular file", index_path.display());
            return index_failure();
        }
        Err(e) => {
            tracing::error!("Error reading {}: {}", index_path.display(), e);
            return index_failure();
        }
    }

    match NamedFile::open_async(index_path).await {
        Ok(file) => file.into_response(req),
        Err(e) => {
            tracing::error!("Error serving {}: {}", index_path.display(), e);
            index_failure()
        }
    }
}

fn index_failure() -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type("text/plain; charset=utf-8")
        .body(INDEX_FAILURE_BODY)
}

/// Resolve the asset directory against the working directory for logging
pub fn describe_asset_dir(dir: &Path) -> PathBuf {
    std::fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf())
}
