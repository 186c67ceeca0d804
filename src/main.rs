use crate::config::SiteConfig;
use crate::router::handle;
use crate::site::Site;
use astra::Server;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod catalog;
mod config;
mod domain;
mod errors;
mod inquiry;
mod responses;
mod router;
mod site;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "estate_site=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match SiteConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    if config.map.api_key.is_none() {
        info!("MAPS_API_KEY not set; project maps will show their error state");
    }

    let addr = config.bind_addr;
    let workers = config.max_workers;
    let site = Site::new(config);

    info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(workers);

    let result = server.serve(move |req: astra::Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_owned();

        let resp = match handle(req, &site) {
            Ok(resp) => resp,
            Err(err) => templates::html_error_response(err),
        };

        debug!(%method, %path, status = resp.status().as_u16(), "request");
        resp
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
