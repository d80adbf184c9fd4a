//! Local preview server.
//!
//! Builds once, then serves the output directory until Ctrl+C.

mod lifecycle;
mod path;
mod response;

pub use lifecycle::setup_shutdown_handler;

use crate::cli::build::build_site;
use crate::config::cfg;
use crate::{debug, log};
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Worker threads answering requests.
const REQUEST_THREADS: usize = 4;

/// Build the site, then serve it (blocking).
pub fn serve_site() -> Result<()> {
    let config = cfg();
    build_site(&config)?;

    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    lifecycle::register_server(Arc::clone(&server));

    log!("serve"; "http://{}", addr);
    run_request_loop(&server)?;
    Ok(())
}

fn run_request_loop(server: &Server) -> Result<()> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(REQUEST_THREADS)
        .thread_name(|i| format!("bistro-http-{i}"))
        .build()
        .context("failed to create request thread pool")?;

    for request in server.incoming_requests() {
        let output = cfg().build.output.clone();
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &output) {
                log!("serve"; "request error: {e}");
            }
        });
    }
    Ok(())
}

fn handle_request(request: Request, output: &Path) -> Result<()> {
    if lifecycle::is_shutdown() {
        return response::respond_unavailable(request);
    }
    if !response::is_read_request(&request) {
        return response::respond_method_not_allowed(request);
    }

    debug!("serve"; "{} {}", request.method(), request.url());
    match path::resolve_path(request.url(), output) {
        Some(file) => response::respond_file(request, &file),
        None => response::respond_not_found(request, output),
    }
}
