use rocket::fairing::{Fairing, Info, Kind};
use rocket::tokio;
use rocket::{Orbit, Rocket};
use std::sync::Arc;
use std::time::Duration;

use crate::config::SiteConfig;
use crate::content::{self, ContentState, Refresh};

/// Liftoff fairing: one best-effort content refresh right after the server
/// reaches orbit, then an optional fixed-interval revalidation loop when
/// `refresh_interval_mins` is non-zero. A failed attempt is never retried
/// early and never touches the existing snapshot.
pub struct ContentRefresh;

#[rocket::async_trait]
impl Fairing for ContentRefresh {
    fn info(&self) -> Info {
        Info {
            name: "Content Refresh",
            kind: Kind::Liftoff,
        }
    }

    async fn on_liftoff(&self, rocket: &Rocket<Orbit>) {
        let state = rocket
            .state::<Arc<ContentState>>()
            .expect("ContentState not found in managed state")
            .clone();
        let config = rocket
            .state::<SiteConfig>()
            .expect("SiteConfig not found in managed state")
            .clone();

        tokio::spawn(async move {
            run_refresh(&state, &config).await;

            let interval = config.refresh_interval_mins;
            if interval == 0 {
                return;
            }
            log::info!("[task] Content revalidation every {} minute(s)", interval);
            loop {
                tokio::time::sleep(Duration::from_secs(interval * 60)).await;
                run_refresh(&state, &config).await;
            }
        });

        log::info!("[task] Background tasks started");
    }
}

/// The HTTP client is the blocking one, so the fetch runs on the blocking
/// thread pool.
async fn run_refresh(state: &Arc<ContentState>, config: &SiteConfig) {
    let s = Arc::clone(state);
    let c = config.clone();
    match tokio::task::spawn_blocking(move || content::refresh(&s, &c)).await {
        Ok(Refresh::Updated) => log::info!("[task] Content snapshot refreshed"),
        Ok(Refresh::KeptExisting) => {
            log::info!("[task] Content refresh kept the existing snapshot")
        }
        Err(e) => log::error!("[task] Content refresh task failed: {}", e),
    }
}
