//! The table of every action kind known to the window manager.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::definition::{ActionDef, ActionReg, InteractiveHooks};

/// Registry of action kinds, keyed by case-insensitive name.
///
/// The application constructs one registry at startup and threads it through
/// to the configuration parser and the dispatcher; there is no process
/// global. Implementors register before the event loop starts, and every
/// later access happens on that single thread, so no locking is involved.
#[derive(Default)]
pub struct ActionRegistry {
	defs: FxHashMap<String, Rc<ActionDef>>,
}

impl ActionRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a new action kind.
	///
	/// Names are unique under ASCII-case-insensitive comparison. Registering
	/// a name that is already taken changes nothing and returns false: the
	/// first registration wins.
	///
	/// # Panics
	///
	/// Panics if only one of the two interactive hooks is supplied. The pair
	/// is all-or-nothing; a lone hook is a defect in the registrant, not bad
	/// input.
	pub fn register(&mut self, reg: ActionReg) -> bool {
		let key = reg.name.to_ascii_lowercase();
		if self.defs.contains_key(&key) {
			tracing::debug!(action = %reg.name, "duplicate action registration ignored");
			return false;
		}

		assert!(
			reg.interactive_input.is_some() == reg.interactive_cancel.is_some(),
			"action '{}' must supply both interactive hooks or neither",
			reg.name
		);

		let interactive = reg
			.interactive_input
			.zip(reg.interactive_cancel)
			.map(|(input, cancel)| InteractiveHooks { input, cancel });

		let def = ActionDef {
			name: reg.name,
			scope: reg.scope,
			setup: reg.setup,
			run: reg.run,
			interactive,
		};
		tracing::trace!(action = %def.name, scope = ?def.scope, "registered action");
		self.defs.insert(key, Rc::new(def));
		true
	}

	/// Looks up a definition by name, ASCII-case-insensitively.
	pub fn lookup(&self, name: &str) -> Option<Rc<ActionDef>> {
		self.defs.get(&name.to_ascii_lowercase()).cloned()
	}

	/// Number of registered action kinds.
	pub fn len(&self) -> usize {
		self.defs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.defs.is_empty()
	}

	/// Lifecycle hook run on a fresh start and again on reconfiguration.
	///
	/// Registrations persist across a reconfiguration, so only a fresh start
	/// has anything to do; currently that is nothing beyond announcing
	/// itself.
	pub fn startup(&mut self, reconfig: bool) {
		if reconfig {
			return;
		}

		tracing::debug!("action registry started");
	}

	/// Releases every registered definition.
	///
	/// A reconfiguration keeps the table: registered action kinds must
	/// survive a configuration reload. Only a real shutdown clears it.
	pub fn shutdown(&mut self, reconfig: bool) {
		if reconfig {
			return;
		}

		tracing::debug!(actions = self.defs.len(), "action registry cleared");
		self.defs.clear();
	}
}
