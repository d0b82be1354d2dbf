#[cfg(feature = "tracer")]
pub mod tracer;
