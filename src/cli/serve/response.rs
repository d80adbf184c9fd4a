//! HTTP responses.

use crate::utils::mime::{self, types};
use anyhow::{Context, Result, anyhow};
use std::fs;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use tiny_http::{Header, Method, Request, Response, StatusCode};

/// Serve a file from the output directory.
pub fn respond_file(request: Request, path: &Path) -> Result<()> {
    let content_type = mime::from_path(path);
    let cache = cache_control(path);

    if is_head_request(&request) {
        let len = fs::metadata(path).map(|m| m.len()).ok();
        let mut response = Response::empty(StatusCode(200))
            .with_header(header("Content-Type", content_type)?)
            .with_header(header("Cache-Control", cache)?);
        if let Some(len) = len {
            response.add_header(header("Content-Length", &len.to_string())?);
        }
        return request.respond(response).map_err(Into::into);
    }

    if let Some(range) = range_header(&request) {
        return respond_range(request, path, content_type, &range);
    }

    let body = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let response = Response::from_data(body)
        .with_header(header("Content-Type", content_type)?)
        .with_header(header("Cache-Control", cache)?);
    request.respond(response)?;
    Ok(())
}

/// Serve part of a file for `Range: bytes=...` (video seeking).
fn respond_range(request: Request, path: &Path, content_type: &str, range: &str) -> Result<()> {
    let file_size = fs::metadata(path)?.len();
    let Some((start, end)) = parse_range(range, file_size) else {
        let response = Response::empty(StatusCode(416))
            .with_header(header("Content-Range", &format!("bytes */{file_size}"))?);
        return request.respond(response).map_err(Into::into);
    };

    let length = end - start + 1;
    let mut file = fs::File::open(path)?;
    file.seek(SeekFrom::Start(start))?;

    let response = Response::new(
        StatusCode(206),
        vec![
            header("Content-Type", content_type)?,
            header("Content-Range", &format!("bytes {start}-{end}/{file_size}"))?,
            header("Accept-Ranges", "bytes")?,
        ],
        file.take(length),
        usize::try_from(length).ok(),
        None,
    );
    request.respond(response)?;
    Ok(())
}

/// Parse `bytes=start-end`, `bytes=start-` or `bytes=-suffix` into an
/// inclusive byte range. `None` when unsatisfiable.
fn parse_range(range: &str, file_size: u64) -> Option<(u64, u64)> {
    let value = range.trim().strip_prefix("bytes=")?;
    // Only the first range of a multi-range request is honored
    let value = value.split(',').next()?.trim();
    let (start, end) = value.split_once('-')?;
    let last = file_size.checked_sub(1)?;

    let (start, end) = match (start.trim(), end.trim()) {
        ("", suffix) => {
            let suffix: u64 = suffix.parse().ok()?;
            if suffix == 0 {
                return None;
            }
            (file_size.saturating_sub(suffix), last)
        }
        (start, "") => (start.parse().ok()?, last),
        (start, end) => (start.parse().ok()?, end.parse::<u64>().ok()?.min(last)),
    };

    (start <= end).then_some((start, end))
}

fn range_header(request: &Request) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|h| h.field.equiv("Range"))
        .map(|h| h.value.to_string())
}

/// Hashed runtime files never change; everything else is revalidated.
fn cache_control(path: &Path) -> &'static str {
    let hashed = path
        .parent()
        .and_then(Path::file_name)
        .is_some_and(|dir| dir == crate::embed::ASSET_DIR);
    if hashed {
        "public, max-age=31536000, immutable"
    } else {
        "no-cache"
    }
}

/// 404, using `404.html` from the output directory when present.
pub fn respond_not_found(request: Request, output: &Path) -> Result<()> {
    let custom = output.join("404.html");

    if let Ok(body) = fs::read(&custom) {
        if is_head_request(&request) {
            return send_head(request, 404, types::HTML);
        }
        return send_body(request, 404, types::HTML, body);
    }
    if is_head_request(&request) {
        return send_head(request, 404, types::PLAIN);
    }
    send_body(request, 404, types::PLAIN, b"404 Not Found".to_vec())
}

/// 405 for anything but GET and HEAD.
pub fn respond_method_not_allowed(request: Request) -> Result<()> {
    let response = Response::from_string("405 Method Not Allowed")
        .with_status_code(StatusCode(405))
        .with_header(header("Content-Type", types::PLAIN)?)
        .with_header(header("Allow", "GET, HEAD")?);
    request.respond(response)?;
    Ok(())
}

/// 503 while shutting down.
pub fn respond_unavailable(request: Request) -> Result<()> {
    send_body(request, 503, types::PLAIN, b"503 Service Unavailable".to_vec())
}

pub fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

pub fn is_read_request(request: &Request) -> bool {
    matches!(request.method(), Method::Get | Method::Head)
}

fn send_head(request: Request, status: u16, content_type: &str) -> Result<()> {
    let response =
        Response::empty(StatusCode(status)).with_header(header("Content-Type", content_type)?);
    request.respond(response)?;
    Ok(())
}

fn send_body(request: Request, status: u16, content_type: &str, body: Vec<u8>) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(header("Content-Type", content_type)?);
    request.respond(response)?;
    Ok(())
}

fn header(key: &str, value: &str) -> Result<Header> {
    Header::from_bytes(key.as_bytes(), value.as_bytes())
        .map_err(|()| anyhow!("invalid header {key}: {value}"))
}
