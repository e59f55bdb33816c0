use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use clap::Parser;
use thiserror::Error;

mod custom_base;
mod packet;
mod tree;

use custom_base::{CustomBaseConverter, DecodeError};
use packet::*;

/// Binary tree drawing and radix-1007 integer codec over HTTP
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0")]
    host: std::net::IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = 80)]
    port: u16,

    /// Most verbose log level to emit
    #[arg(long, default_value = "debug")]
    log_level: tracing::Level,
}

#[derive(Clone, Debug)]
struct AppState {
    converter: Arc<CustomBaseConverter>,
}

impl AppState {
    fn new() -> Self {
        let converter = CustomBaseConverter::new();
        tracing::debug!(radix = converter.radix(), "built digit alphabet");
        AppState {
            converter: Arc::new(converter),
        }
    }
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Decode(_) => StatusCode::BAD_REQUEST,
        };
        let detail = self.to_string();
        (status, Json(ErrorRes { detail })).into_response()
    }
}

async fn root() -> Json<HelloRes> {
    Json(HelloRes {
        message: "Hello World",
    })
}

async fn encode(
    State(state): State<AppState>,
    Json(payload): Json<EncodeReq>,
) -> Json<EncodeRes> {
    let encoded = state.converter.encode(&payload.decimal);
    tracing::debug!(decimal = %payload.decimal, %encoded, "encoded");
    Json(EncodeRes {
        decimal: payload.decimal,
        encoded,
    })
}

async fn decode(
    State(state): State<AppState>,
    Json(payload): Json<DecodeReq>,
) -> Result<Json<DecodeRes>, AppError> {
    let decimal = state.converter.decode(&payload.encoded).map_err(|err| {
        tracing::warn!(%err, "rejected encoded value");
        err
    })?;
    tracing::debug!(encoded = %payload.encoded, %decimal, "decoded");
    Ok(Json(DecodeRes {
        encoded: payload.encoded,
        decimal,
    }))
}

async fn tree_ascii(Json(payload): Json<TreeReq>) -> impl IntoResponse {
    let mode = tree::Mode::from_name(payload.mode.as_deref());
    let root = tree::build(&payload.values, mode);
    tracing::debug!(?mode, len = payload.values.len(), "drawing tree");
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        tree::ascii_tree(root.as_deref()),
    )
}

async fn tree_json(Json(values): Json<Vec<Option<TreeValue>>>) -> Json<TreeRes> {
    let root = tree::build_tree(&values);
    Json(TreeRes {
        inorder: tree::inorder(root.as_deref()),
        ascii_tree: tree::ascii_tree(root.as_deref()),
    })
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/encode", post(encode))
        .route("/decode", post(decode))
        .route("/tree", post(tree_json))
        .route("/tree_ascii", post(tree_ascii))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // initialize tracing
    tracing_subscriber::fmt().with_max_level(cli.log_level).init();

    let addr = SocketAddr::new(cli.host, cli.port);
    tracing::info!(%addr, "listening");

    axum::Server::bind(&addr)
        .serve(app(AppState::new()).into_make_service())
        .await
        .expect("Failed to serve!");
}
