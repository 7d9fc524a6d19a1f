//! Memory access trace statistics (`tracestats`)

// Modules
mod args;

// Imports
use {
	self::args::Args,
	anyhow::Context,
	clap::Parser,
	std::fs,
	tracestats_util::logger,
};

fn main() -> Result<(), anyhow::Error> {
	// Get arguments
	let args = Args::parse();
	logger::pre_init::debug(format!("Args: {args:?}"));

	// Initialize logging
	logger::init(args.log_file.as_deref(), args.log_file_append);

	// Analyze the trace file
	let report = tracestats::analyze_file(&args.trace_file).context("Unable to analyze trace file")?;
	tracing::trace!(target: "tracestats::analyze", ?report, "Analyzed trace file");

	// Write the full report, if requested
	if let Some(output_path) = &args.output_file {
		let output_file = fs::File::create(output_path).context("Unable to create output file")?;
		serde_json::to_writer(output_file, &report).context("Unable to write to output file")?;
	}

	// Finally print it
	print!("{report}");

	Ok(())
}
