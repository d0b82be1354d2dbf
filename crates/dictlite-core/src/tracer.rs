use std::{env, ffi::OsStr};

use tracing::{dispatcher, Subscriber};
use tracing_subscriber::{
    layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, Layer, Registry,
};

fn init_once_subscriber() {
    // Skip init if has been set
    if dispatcher::has_been_set() {
        return;
    }

    fn init_layer_env_filter<S>() -> impl Layer<S>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        ::tracing_subscriber::EnvFilter::from_default_env()
    }

    fn init_layer_stdfmt<S>() -> impl Layer<S>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        ::tracing_subscriber::fmt::layer().with_writer(::std::io::stderr)
    }

    // Another library may have won the race; that subscriber stays in charge
    let _ = Registry::default()
        .with(init_layer_env_filter())
        .with(init_layer_stdfmt())
        .try_init();
}

pub fn init_once() {
    init_once_with_default()
}

pub fn init_once_with(level: impl AsRef<OsStr>) {
    // Skip init if has been set
    if dispatcher::has_been_set() {
        return;
    }

    // set custom tracing level
    env::set_var(KEY, level);

    init_once_subscriber()
}

pub fn init_once_with_default() {
    // Skip init if has been set
    if dispatcher::has_been_set() {
        return;
    }

    // set default tracing level
    if env::var_os(KEY).is_none() {
        env::set_var(KEY, "INFO");
    }

    init_once_subscriber()
}

/// Maps a verbosity count (e.g. repeated `-v` flags) onto a level.
///
/// Counts above `3` stay at `TRACE`.
///
pub const fn level_from_int(level: u8) -> &'static str {
    match level {
        0 => "WARN",
        1 => "INFO",
        2 => "DEBUG",
        _ => "TRACE",
    }
}

pub fn init_once_with_level_int(level: u8) {
    init_once_with(level_from_int(level))
}

/// Picks the level for a verbosity count, or `None` to keep the
/// `RUST_LOG` already present in the environment.
///
pub const fn verbosity_level(level: u8, has_env_level: bool) -> Option<&'static str> {
    if level == 0 && has_env_level {
        None
    } else {
        Some(level_from_int(level))
    }
}

pub fn init_once_with_verbosity(level: u8) {
    match verbosity_level(level, env::var_os(KEY).is_some()) {
        Some(level) => init_once_with(level),
        None => init_once_subscriber(),
    }
}

const KEY: &str = "RUST_LOG";
