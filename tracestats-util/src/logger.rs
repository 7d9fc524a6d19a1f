//! Logger

// Imports
use {
	std::{fs, io, path::Path, sync::Arc},
	tracing_subscriber::{prelude::*, EnvFilter},
};

/// Initializes the logger.
///
/// Logs to stderr, with filtering from `RUST_LOG`, and to `log_file`,
/// if any, with filtering from `RUST_LOG_FILE`.
pub fn init(log_file: Option<&Path>, log_file_append: bool) {
	// Stderr layer
	let stderr_layer = tracing_subscriber::fmt::layer()
		.with_writer(io::stderr)
		.with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")));

	// Log file layer
	let log_file_layer = log_file.and_then(|path| {
		let file = fs::OpenOptions::new()
			.create(true)
			.write(true)
			.append(log_file_append)
			.truncate(!log_file_append)
			.open(path);
		let file = match file {
			Ok(file) => file,
			Err(err) => {
				eprintln!("Unable to open log file {path:?}: {err}");
				return None;
			},
		};

		let layer = tracing_subscriber::fmt::layer()
			.with_writer(Arc::new(file))
			.with_ansi(false)
			.with_filter(EnvFilter::from_env("RUST_LOG_FILE"));
		Some(layer)
	});

	tracing_subscriber::registry()
		.with(stderr_layer)
		.with(log_file_layer)
		.init();

	// Then emit any messages queued before initialization
	for msg in pre_init::drain() {
		tracing::debug!("{msg}");
	}
}

/// Pre-initialization logging
pub mod pre_init {
	// Imports
	use std::sync::Mutex;

	/// Queued debug messages
	static DEBUG_MSGS: Mutex<Vec<String>> = Mutex::new(Vec::new());

	/// Queues a debug message to be emitted once the logger is initialized.
	pub fn debug(msg: String) {
		DEBUG_MSGS.lock().expect("Message queue was poisoned").push(msg);
	}

	/// Drains all queued messages
	pub(super) fn drain() -> Vec<String> {
		std::mem::take(&mut *DEBUG_MSGS.lock().expect("Message queue was poisoned"))
	}
}
