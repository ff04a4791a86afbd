pub mod errors;
pub mod helpers;
pub mod telemetry;
