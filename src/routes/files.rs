//! File-backed responses under the configured root directory.

use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::warn;

use crate::http::response::Response;

/// Serves `name` from under `root`.
///
/// No configured root or no such file answers 404. A file that exists per
/// the metadata lookup but then fails to read answers 500. Names that could
/// escape the root are rejected with 404 before any filesystem access.
pub async fn serve(root: Option<&Path>, name: &str) -> Response {
    let Some(root) = root else {
        return Response::not_found();
    };

    let Some(path) = resolve(root, name) else {
        warn!("Rejected file name {:?}", name);
        return Response::not_found();
    };

    if fs::metadata(&path).await.is_err() {
        return Response::not_found();
    }

    match fs::read(&path).await {
        Ok(body) => Response::octet_stream(body),
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            Response::internal_error()
        }
    }
}

/// Joins `name` onto `root`, refusing anything that could step outside the
/// root: empty names, absolute paths, and non-normal components such as
/// `..` segments.
fn resolve(root: &Path, name: &str) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    let requested = Path::new(name);
    let confined = requested
        .components()
        .all(|c| matches!(c, Component::Normal(_)));

    if !confined {
        return None;
    }

    Some(root.join(requested))
}
