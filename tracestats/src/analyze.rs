//! Trace analysis

// Imports
use {
	crate::{report::Report, stats::Statistics, trace::TraceReader},
	anyhow::Context,
	std::{fs, io, path::Path},
};

/// Analyzes all records of the trace in `reader`.
pub fn analyze<R: io::BufRead>(reader: R) -> Result<Report, anyhow::Error> {
	let mut trace_reader = TraceReader::new(reader);
	let mut statistics = Statistics::new();

	// Go through all records
	let record_it = std::iter::from_fn(|| trace_reader.read_next().transpose());
	for record_res in record_it {
		let record = record_res.context("Unable to read next record")?;
		statistics.register(record);
	}

	Ok(statistics.into_report())
}

/// Analyzes the trace file at `path`.
pub fn analyze_file(path: &Path) -> Result<Report, anyhow::Error> {
	let trace_file = fs::File::open(path).with_context(|| format!("Unable to open trace file {path:?}"))?;
	self::analyze(io::BufReader::new(trace_file))
}
