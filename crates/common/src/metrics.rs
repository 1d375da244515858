use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static CONTACTS_SUBMITTED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "techsite_contacts_submitted_total",
        "Contact form submissions persisted"
    )
    .expect("register contacts_submitted_total")
});

pub static NOTIFICATION_FAILURES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "techsite_notification_failures_total",
        "Contact notifications that failed to send"
    )
    .expect("register notification_failures_total")
});

pub static SERVICES_SEEDED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "techsite_services_seeded_total",
        "Default service records inserted by the seed routine"
    )
    .expect("register services_seeded_total")
});

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    // touch the counters so they show up before their first increment
    Lazy::force(&CONTACTS_SUBMITTED_TOTAL);
    Lazy::force(&NOTIFICATION_FAILURES_TOTAL);
    Lazy::force(&SERVICES_SEEDED_TOTAL);

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_output_lists_counters() {
        let (status, body) = encode_metrics();
        assert_eq!(status, axum::http::StatusCode::OK);
        assert!(body.contains("techsite_contacts_submitted_total"));
        assert!(body.contains("techsite_services_seeded_total"));
    }
}
