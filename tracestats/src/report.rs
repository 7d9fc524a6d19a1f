//! Analysis report

// Imports
use {
	indexmap::IndexMap,
	itertools::Itertools,
	std::{cmp, fmt},
};

/// Number of pages reported in each ranking
pub const MAX_RANKED_PAGES: usize = 4;

/// Analysis report
#[derive(PartialEq, Eq, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Report {
	/// Access counts
	pub counts: Counts,

	/// Accesses per instruction page
	// Note: Kept in first-access order, see `Statistics`.
	pub instruction_pages: IndexMap<String, u64>,

	/// Accesses per data page
	pub data_pages: IndexMap<String, u64>,
}

impl Report {
	/// Returns the `count` most accessed instruction pages, most accessed first.
	pub fn top_instruction_pages(&self, count: usize) -> impl Iterator<Item = (&str, u64)> + '_ {
		self::top_pages(&self.instruction_pages, count)
	}

	/// Returns the `count` most accessed data pages, most accessed first.
	pub fn top_data_pages(&self, count: usize) -> impl Iterator<Item = (&str, u64)> + '_ {
		self::top_pages(&self.data_pages, count)
	}
}

impl fmt::Display for Report {
	// Note: This exact layout is parsed by downstream scripts, keep it
	//       byte-for-byte stable.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Counts:")?;
		writeln!(f, "  {:<13}{}", "Instructions", self.counts.instructions)?;
		writeln!(f, "  {:<13}{}", "Loads", self.counts.loads)?;
		writeln!(f, "  {:<13}{}", "Stores", self.counts.stores)?;
		writeln!(f, "  {:<13}{}", "Modifies", self.counts.modifies)?;
		writeln!(f)?;

		writeln!(f, "Instructions:")?;
		for (page, accesses) in self.top_instruction_pages(MAX_RANKED_PAGES) {
			writeln!(f, "0x{page}000,{accesses}")?;
		}

		writeln!(f, "Data:")?;
		for (page, accesses) in self.top_data_pages(MAX_RANKED_PAGES) {
			writeln!(f, "0x{page}000,{accesses}")?;
		}

		Ok(())
	}
}

/// Access counts
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Counts {
	/// Instruction fetches
	pub instructions: u64,

	/// Loads
	pub loads: u64,

	/// Stores
	pub stores: u64,

	/// Modifies
	pub modifies: u64,
}

/// Returns the `count` most accessed pages in `pages`, most accessed first.
///
/// Pages with the same number of accesses are yielded in first-access order,
/// which the stable sort preserves from the map's insertion order.
fn top_pages(pages: &IndexMap<String, u64>, count: usize) -> impl Iterator<Item = (&str, u64)> + '_ {
	pages
		.iter()
		.sorted_by_key(|&(_, &accesses)| cmp::Reverse(accesses))
		.take(count)
		.map(|(page, &accesses)| (page.as_str(), accesses))
}

#[cfg(test)]
mod tests {
	// Imports
	use super::*;

	/// Creates a report with the given page maps and zeroed counts
	fn report(instruction_pages: &[(&str, u64)], data_pages: &[(&str, u64)]) -> Report {
		let to_map = |pages: &[(&str, u64)]| {
			pages
				.iter()
				.map(|&(page, accesses)| (page.to_owned(), accesses))
				.collect::<IndexMap<_, _>>()
		};

		Report {
			counts:            Counts {
				instructions: 0,
				loads:        0,
				stores:       0,
				modifies:     0,
			},
			instruction_pages: to_map(instruction_pages),
			data_pages:        to_map(data_pages),
		}
	}

	#[test]
	fn top_pages_sorts_by_descending_accesses() {
		let report = self::report(&[("aaaa", 1), ("bbbb", 3), ("cccc", 2)], &[]);
		let top = report.top_instruction_pages(MAX_RANKED_PAGES).collect::<Vec<_>>();
		assert_eq!(top, [("bbbb", 3), ("cccc", 2), ("aaaa", 1)]);
	}

	#[test]
	fn top_pages_truncates_to_requested_count() {
		let report = self::report(&[("aaaa", 5), ("bbbb", 4), ("cccc", 3), ("dddd", 2), ("eeee", 1)], &[]);
		let top = report.top_instruction_pages(MAX_RANKED_PAGES).collect::<Vec<_>>();
		assert_eq!(top, [("aaaa", 5), ("bbbb", 4), ("cccc", 3), ("dddd", 2)]);
	}

	#[test]
	fn top_pages_breaks_ties_by_first_access() {
		let report = self::report(&[], &[("5222", 2), ("1111", 1), ("6333", 2)]);
		let top = report.top_data_pages(MAX_RANKED_PAGES).collect::<Vec<_>>();
		assert_eq!(top, [("5222", 2), ("6333", 2), ("1111", 1)]);
	}

	#[test]
	fn render_matches_reference_layout() {
		let mut report = self::report(&[("4111", 2)], &[("5222", 2), ("6333", 1)]);
		report.counts = Counts {
			instructions: 2,
			loads:        1,
			stores:       1,
			modifies:     1,
		};

		let expected = "Counts:\n  Instructions 2\n  Loads        1\n  Stores       1\n  Modifies     \
		                1\n\nInstructions:\n0x4111000,2\nData:\n0x5222000,2\n0x6333000,1\n";
		assert_eq!(report.to_string(), expected);
	}

	#[test]
	fn render_prints_empty_rankings() {
		let report = self::report(&[], &[]);
		let expected = "Counts:\n  Instructions 0\n  Loads        0\n  Stores       0\n  Modifies     \
		                0\n\nInstructions:\nData:\n";
		assert_eq!(report.to_string(), expected);
	}
}
