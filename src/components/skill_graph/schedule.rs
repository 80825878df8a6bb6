use std::cell::Cell;
use std::rc::Rc;

/// Stamp handed to a scheduled pass; see [`Generation::is_current`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Counter shared between a scheduler and its queued passes. Issuing a new
/// ticket makes every earlier one stale.
#[derive(Clone, Debug, Default)]
pub struct Generation {
	latest: Rc<Cell<u64>>,
}

impl Generation {
	pub fn issue(&self) -> Ticket {
		let next = self.latest.get().wrapping_add(1);
		self.latest.set(next);
		Ticket(next)
	}

	pub fn is_current(&self, ticket: Ticket) -> bool {
		self.latest.get() == ticket.0
	}

	/// Makes every ticket issued so far stale.
	pub fn cancel(&self) {
		self.issue();
	}
}
