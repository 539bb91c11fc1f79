use log::info;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Data, Request, Response};
use std::time::Instant;

/// Logs each request on arrival and its status and latency on completion
pub struct RequestLogger;

#[derive(Clone, Copy)]
struct RequestStart(Option<Instant>);

#[rocket::async_trait]
impl Fairing for RequestLogger {
    fn info(&self) -> Info {
        Info {
            name: "Request Logger",
            kind: Kind::Request | Kind::Response,
        }
    }

    async fn on_request(&self, req: &mut Request<'_>, _: &mut Data<'_>) {
        req.local_cache(|| RequestStart(Some(Instant::now())));
        info!(
            "{} {} {}",
            req.method(),
            req.uri(),
            req.headers().get_one("User-Agent").unwrap_or("Unknown")
        );
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let RequestStart(start) = *req.local_cache(|| RequestStart(None));
        match start {
            Some(start) => info!(
                "{} {} -> {} ({} ms)",
                req.method(),
                req.uri(),
                res.status(),
                start.elapsed().as_millis()
            ),
            None => info!("{} {} -> {}", req.method(), req.uri(), res.status()),
        }
    }
}
