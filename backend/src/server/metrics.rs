//! Prometheus request metrics for the travel tracker.
//!
//! Counters and latency histograms are registered under the
//! `travel_tracker` namespace and scraped from `/metrics`. When metrics are
//! not configured the layer still wraps the app so the middleware type stays
//! the same in both builds.

use std::io;
use std::sync::Arc;

use actix_service::{
    Service, ServiceExt as _, Transform,
    boxed::{self, BoxService},
};
use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Compat;
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use futures_util::future::LocalBoxFuture;

/// Prefix of every exported metric family.
pub(crate) const METRICS_NAMESPACE: &str = "travel_tracker";
/// Scrape path answered by the middleware itself.
pub(crate) const METRICS_ENDPOINT: &str = "/metrics";

/// Build the request metrics collector for this service.
///
/// # Errors
/// Returns an [`io::Error`] when the Prometheus registry rejects the
/// collectors.
pub(crate) fn build_metrics() -> io::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new(METRICS_NAMESPACE)
        .endpoint(METRICS_ENDPOINT)
        .build()
        .map_err(|e| io::Error::other(format!("configure Prometheus metrics: {e}")))
}

/// Middleware recording request metrics, or passing requests through.
#[derive(Clone)]
pub(crate) struct RequestMetrics {
    collector: Option<Arc<PrometheusMetrics>>,
}

impl RequestMetrics {
    /// Record with `collector` when present.
    #[must_use]
    pub(crate) fn new(collector: Option<PrometheusMetrics>) -> Self {
        Self {
            collector: collector.map(Arc::new),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestMetrics
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = BoxService<ServiceRequest, ServiceResponse<BoxBody>, actix_web::Error>;
    type Future = LocalBoxFuture<'static, Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        match self.collector.clone() {
            Some(collector) => {
                let pending = Compat::new((*collector).clone()).new_transform(service);
                Box::pin(async move { Ok(boxed::service(pending.await?)) })
            }
            None => Box::pin(async move {
                let passthrough =
                    service.map(|res: ServiceResponse<B>| res.map_into_boxed_body());
                Ok(boxed::service(passthrough))
            }),
        }
    }
}
