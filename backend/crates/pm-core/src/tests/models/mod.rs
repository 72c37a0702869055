mod audit_action;
mod event_payload;
mod iteration;
mod measurement_mode;
