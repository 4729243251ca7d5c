//! Local HTML fixture server.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub const ARTICLE_HTML: &str = r#"<!doctype html>
<html>
  <head><title>Climate report</title><script>var tracking = true;</script></head>
  <body>
    <h1>Climate change effects</h1>
    <p>Climate change effects include rising seas.</p>
    <div class="body"><p>Scientists expect more extreme weather.</p></div>
    <footer>Copyright notice</footer>
  </body>
</html>"#;

pub const ARTICLE_TEXT: &str =
    "Climate change effects include rising seas. Scientists expect more extreme weather.";

pub const POSITIVE_HTML: &str =
    "<html><body><p>A great, safe and reliable benefit for everyone.</p></body></html>";

pub const NO_PARAGRAPHS_HTML: &str =
    "<html><body><div>Layout only</div><span>no paragraphs</span></body></html>";

/// How long the `/slow` route stalls before answering.
pub const SLOW_ROUTE_DELAY: Duration = Duration::from_secs(3);

pub struct FixtureServer {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl FixtureServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for FixtureServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn router() -> Router {
    Router::new()
        .route("/article", get(|| async { Html(ARTICLE_HTML) }))
        .route("/positive", get(|| async { Html(POSITIVE_HTML) }))
        .route("/layout", get(|| async { Html(NO_PARAGRAPHS_HTML) }))
        .route(
            "/missing",
            get(|| async { (StatusCode::NOT_FOUND, Html("<p>Not found</p>")) }),
        )
        .route(
            "/broken",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html("<p>Internal error</p>"),
                )
            }),
        )
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(SLOW_ROUTE_DELAY).await;
                Html(ARTICLE_HTML)
            }),
        )
}

/// Serves the fixture routes on an ephemeral localhost port.
pub async fn spawn_fixture_server() -> std::io::Result<FixtureServer> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, router())
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    Ok(FixtureServer {
        addr,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}
