use crate::page::model::MapDocument;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::Filter;

fn bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

struct ServerState {
    page: String,
    document: MapDocument,
}

/// One-shot HTTP bridge: serves the rendered page at `/` and the composed
/// document as JSON at `/data`. There is no background refresh; what was
/// composed at startup is what gets served.
pub struct MapServer {
    state: Arc<RwLock<ServerState>>,
}

impl MapServer {
    pub fn new(page: String, document: MapDocument) -> Self {
        let state = Arc::new(RwLock::new(ServerState { page, document }));
        let state_for_filter = state.clone();
        let state_filter = warp::any().map(move || state_for_filter.clone());

        let page_route = warp::path::end()
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: Arc<RwLock<ServerState>>| {
                warp::reply::html(state.read().unwrap().page.clone())
            });

        let data_route = warp::path("data")
            .and(warp::get())
            .and(state_filter)
            .map(|state: Arc<RwLock<ServerState>>| {
                warp::reply::json(&state.read().unwrap().document)
            });

        thread::spawn(move || {
            let routes = page_route.or(data_route);
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(bind_address()).await;
            });
        });

        Self { state }
    }

    pub fn address(&self) -> SocketAddr {
        bind_address()
    }

    pub fn publish_status(&self, message: &str) {
        println!("[MAP] {}", message);
    }

    #[cfg(test)]
    fn snapshot_markers(&self) -> usize {
        self.state.read().unwrap().document.markers.markers.len()
    }
}
