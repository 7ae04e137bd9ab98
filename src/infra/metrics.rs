use {
    crate::api::routes, prometheus_metric_storage::StorageRegistry, std::sync::OnceLock,
};

/// Metrics for the order router.
#[derive(Debug, Clone, prometheus_metric_storage::MetricStorage)]
#[metric(subsystem = "order_router")]
struct Metrics {
    /// Total number of order messages received, by route.
    #[metric(labels("route"))]
    requests: prometheus::IntCounterVec,

    /// Orders rejected during admission, by error kind.
    #[metric(labels("reason"))]
    rejections: prometheus::IntCounterVec,

    /// Orders handed to a market's epoch queue, by route.
    #[metric(labels("route"))]
    submissions: prometheus::IntCounterVec,
}

pub fn request(route: &str) {
    get().requests.with_label_values(&[route]).inc();
}

pub fn rejection(error: &routes::Error) {
    get()
        .rejections
        .with_label_values(&[error.format_variant()])
        .inc();
}

pub fn submission(route: &str) {
    get().submissions.with_label_values(&[route]).inc();
}

/// Get the metrics instance.
fn get() -> &'static Metrics {
    static REGISTRY: OnceLock<StorageRegistry> = OnceLock::new();
    let registry =
        REGISTRY.get_or_init(|| StorageRegistry::new(prometheus::default_registry().clone()));
    Metrics::instance(registry).expect("unexpected error getting metrics instance")
}
