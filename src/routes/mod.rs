//! Built-in routes.
//!
//! A fixed rule list evaluated top to bottom; first match wins. The rules
//! are mutually exclusive by prefix, so order only encodes priority.

pub mod files;

use crate::config::Config;
use crate::http::request::Request;
use crate::http::response::Response;

const ECHO_PREFIX: &str = "/echo/";
const FILES_PREFIX: &str = "/files/";

/// Maps a parsed request to a response.
pub async fn route(request: &Request, config: &Config) -> Response {
    match request.path.as_str() {
        "/" => Response::ok("OK"),

        "/user-agent" => Response::ok(request.user_agent.as_str()),

        path if path.starts_with(ECHO_PREFIX) => Response::ok(&path[ECHO_PREFIX.len()..]),

        path if path.starts_with(FILES_PREFIX) => {
            files::serve(config.directory.as_deref(), &path[FILES_PREFIX.len()..]).await
        }

        _ => Response::not_found(),
    }
}
