//! Local stand-in for the gateway: records every request and answers from a script.
#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, Uri},
    routing::post,
};
use greenapi_harness::prelude::*;
use serde_json::Value;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const INSTANCE: &str = "1101000001";
pub const TOKEN: &str = "token123";

#[derive(Clone, Debug, PartialEq)]
pub struct Recorded {
    pub path: String,
    pub body: Value,
}

#[derive(Clone, Default)]
pub struct StubState {
    script: Arc<Mutex<VecDeque<(StatusCode, String)>>>,
    recorded: Arc<Mutex<Vec<Recorded>>>,
}

pub struct StubGateway {
    pub addr: SocketAddr,
    state: StubState,
}

impl StubGateway {
    /// Start a stub that answers requests with `script` in order, then `200 {}`
    pub async fn start(script: Vec<(StatusCode, &str)>) -> Self {
        let state = StubState::default();
        state.script.lock().unwrap().extend(
            script
                .into_iter()
                .map(|(status, body)| (status, body.to_string())),
        );

        let app = Router::new()
            .route("/{*path}", post(handle))
            .with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn config(&self) -> GatewayConfig {
        config_for(&format!("http://{}", self.addr))
    }

    pub fn gateway(&self) -> Gateway {
        Gateway::new(self.config()).unwrap()
    }

    pub fn recorded(&self) -> Vec<Recorded> {
        self.state.recorded.lock().unwrap().clone()
    }
}

pub fn config_for(api_url: &str) -> GatewayConfig {
    GatewayConfig {
        api_url: api_url.to_string(),
        media_url: api_url.to_string(),
        id_instance: INSTANCE.to_string(),
        api_token_instance: TOKEN.to_string(),
    }
}

async fn handle(
    State(state): State<StubState>,
    uri: Uri,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    state.recorded.lock().unwrap().push(Recorded {
        path: uri.path().to_string(),
        body,
    });
    state
        .script
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or((StatusCode::OK, "{}".to_string()))
}
