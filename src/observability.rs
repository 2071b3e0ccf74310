use biometrics::{Collector, Counter, Moments};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("fitai.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("fitai.client.request_errors");
pub(crate) static CLIENT_REQUEST_DURATION: Moments =
    Moments::new("fitai.client.request_duration_seconds");

pub(crate) static SESSION_TURNS: Counter = Counter::new("fitai.session.turns");
pub(crate) static SESSION_TURN_ERRORS: Counter = Counter::new("fitai.session.turn_errors");
pub(crate) static SESSION_ANALYSES: Counter = Counter::new("fitai.session.analyses");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);
    collector.register_moments(&CLIENT_REQUEST_DURATION);

    collector.register_counter(&SESSION_TURNS);
    collector.register_counter(&SESSION_TURN_ERRORS);
    collector.register_counter(&SESSION_ANALYSES);
}
