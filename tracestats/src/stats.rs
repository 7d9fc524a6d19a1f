//! Access statistics

// Imports
use {
	crate::{
		report::{Counts, Report},
		trace::{Mode, Record},
	},
	indexmap::IndexMap,
};

/// Access statistics
///
/// Accumulated over a single pass of the trace, then frozen
/// into a [`Report`].
#[derive(Clone, Debug, Default)]
pub struct Statistics {
	/// Instruction fetches
	instructions: u64,

	/// Loads
	loads: u64,

	/// Stores
	stores: u64,

	/// Modifies
	modifies: u64,

	/// Accesses per instruction page
	// Note: Ranking ties break by first access, so we keep both page
	//       maps in insertion order.
	instruction_pages: IndexMap<String, u64>,

	/// Accesses per data page
	data_pages: IndexMap<String, u64>,
}

impl Statistics {
	/// Creates new, empty, statistics
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a record on these statistics
	pub fn register(&mut self, record: Record) {
		match record.mode {
			// Instruction fetches only count towards the instruction side
			Mode::Instruction => {
				self.instructions += 1;
				*self.instruction_pages.entry(record.page).or_insert(0) += 1;
				return;
			},

			Mode::Load => self.loads += 1,
			Mode::Store => self.stores += 1,
			Mode::Modify => self.modifies += 1,

			// Note: Unrecognized tags bump no counter, but still count
			//       as a data access below.
			Mode::Other(tag) => tracing::debug!(?tag, "Unrecognized mode tag"),
		}

		*self.data_pages.entry(record.page).or_insert(0) += 1;
	}

	/// Converts these statistics into a report
	pub fn into_report(self) -> Report {
		Report {
			counts:            Counts {
				instructions: self.instructions,
				loads:        self.loads,
				stores:       self.stores,
				modifies:     self.modifies,
			},
			instruction_pages: self.instruction_pages,
			data_pages:        self.data_pages,
		}
	}
}
