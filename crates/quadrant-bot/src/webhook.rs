//! Webhook transport
//!
//! Uses hyper http1 with TokioIo for async handling.

use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use quadrant_interaction::telegram::Update;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

use crate::dispatch::Dispatcher;

type BoxBody = http_body_util::combinators::BoxBody<Bytes, hyper::Error>;

struct WebhookState {
    path: String,
    dispatcher: Arc<Dispatcher>,
}

/// Binds `addr` and serves webhook requests until the task is cancelled.
pub async fn run(addr: SocketAddr, path: String, dispatcher: Arc<Dispatcher>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Webhook server listening on {} at {}", addr, path);
    serve(listener, path, dispatcher).await;
    Ok(())
}

/// Accept loop over an already bound listener.
pub async fn serve(listener: TcpListener, path: String, dispatcher: Arc<Dispatcher>) {
    let state = Arc::new(WebhookState { path, dispatcher });

    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                let state = Arc::clone(&state);
                tokio::spawn(async move {
                    let io = TokioIo::new(stream);

                    let service = service_fn(move |req| {
                        let state = Arc::clone(&state);
                        async move { handle_request(state, req).await }
                    });

                    if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                        debug!("Error serving connection from {}: {:?}", addr, err);
                    }
                });
            }
            Err(e) => {
                error!("Error accepting connection: {:?}", e);
            }
        }
    }
}

/// Route incoming HTTP requests
async fn handle_request(
    state: Arc<WebhookState>,
    req: Request<Incoming>,
) -> Result<Response<BoxBody>, hyper::Error> {
    if req.method() != Method::POST || req.uri().path() != state.path {
        return Ok(text_response(StatusCode::NOT_FOUND, "not found"));
    }

    let body = req.into_body().collect().await?.to_bytes();
    let update: Update = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            warn!("Rejected malformed update: {}", e);
            return Ok(text_response(StatusCode::BAD_REQUEST, "bad request"));
        }
    };

    // Telegram redelivers an update until it gets a 2xx, so the reply waits
    // for the dispatch to finish.
    state.dispatcher.dispatch(update).await;
    Ok(text_response(StatusCode::OK, "ok"))
}

fn text_response(status: StatusCode, text: &'static str) -> Response<BoxBody> {
    let body = Full::new(Bytes::from_static(text.as_bytes()))
        .map_err(|never| match never {})
        .boxed();
    let mut response = Response::new(body);
    *response.status_mut() = status;
    response
}
