//! Parsed action instances.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::definition::{ActionDef, Options};

/// One parsed use of an action kind, bound to that use's options.
///
/// Instances are handed out as `Rc<Action>`: every binding that refers to
/// the same parsed configuration shares one instance, and the options value
/// is dropped exactly once when the last handle goes away, followed by the
/// instance's reference on the definition. All of this runs on the single
/// event-loop thread, so a non-atomic count is enough.
pub struct Action {
	def: Rc<ActionDef>,
	options: RefCell<Option<Options>>,
}

impl Action {
	pub(crate) fn new(def: Rc<ActionDef>) -> Rc<Self> {
		Rc::new(Self {
			def,
			options: RefCell::new(None),
		})
	}

	/// The definition this instance is bound to.
	pub fn def(&self) -> &ActionDef {
		&self.def
	}

	/// True iff the bound definition carries the interactive hook pair.
	///
	/// The event loop uses this to decide whether further input should be
	/// routed to [`Action::interactive_input`] instead of being dispatched
	/// afresh.
	pub fn is_interactive(&self) -> bool {
		self.def.is_interactive()
	}

	/// Feeds one raw input event to this in-progress interactive action.
	///
	/// Returns true while the action wants further input.
	///
	/// # Panics
	///
	/// Panics if the instance is not interactive; the event loop must gate
	/// on [`Action::is_interactive`] first.
	pub fn interactive_input(&self, event: &dyn Any) -> bool {
		let hooks = self
			.def
			.interactive()
			.expect("interactive input fed to a non-interactive action");
		(hooks.input)(event, &mut self.options.borrow_mut())
	}

	/// Aborts this in-progress interactive action.
	///
	/// # Panics
	///
	/// Panics if the instance is not interactive.
	pub fn interactive_cancel(&self) {
		let hooks = self
			.def
			.interactive()
			.expect("interactive cancel on a non-interactive action");
		(hooks.cancel)(&mut self.options.borrow_mut())
	}

	pub(crate) fn set_options(&self, options: Option<Options>) {
		*self.options.borrow_mut() = options;
	}

	/// Runs `f` with mutable access to the per-use options slot.
	pub(crate) fn with_options<R>(&self, f: impl FnOnce(&mut Option<Options>) -> R) -> R {
		f(&mut self.options.borrow_mut())
	}
}

impl fmt::Debug for Action {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Action")
			.field("def", &self.def.name())
			.field("has_options", &self.options.borrow().is_some())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use super::*;
	use crate::definition::{ActionReg, ActionScope};
	use crate::registry::ActionRegistry;

	fn registry_with_interactive() -> ActionRegistry {
		let mut registry = ActionRegistry::new();
		registry.register(ActionReg {
			name: "DirectionalCycleWindows".to_string(),
			scope: ActionScope::Global,
			setup: Box::new(|_, _| Some(Box::new(Vec::<u32>::new()))),
			run: Box::new(|_, _| {}),
			interactive_input: Some(Box::new(|event, options| {
				let key = event.downcast_ref::<u32>().expect("test feeds key codes");
				let keys = options
					.as_mut()
					.and_then(|o| o.downcast_mut::<Vec<u32>>())
					.expect("options attached");
				keys.push(*key);
				// Escape ends the interaction.
				*key != 9
			})),
			interactive_cancel: Some(Box::new(|options| {
				if let Some(keys) = options.as_mut().and_then(|o| o.downcast_mut::<Vec<u32>>()) {
					keys.clear();
				}
			})),
		});
		registry.register(ActionReg {
			name: "Close".to_string(),
			scope: ActionScope::Client,
			setup: Box::new(|_, _| None),
			run: Box::new(|_, _| {}),
			interactive_input: None,
			interactive_cancel: None,
		});
		registry
	}

	#[test]
	fn is_interactive_follows_the_definition() {
		let registry = registry_with_interactive();
		let cycle = registry
			.parse_by_name("directionalcyclewindows")
			.expect("registered");
		let close = registry.parse_by_name("close").expect("registered");

		assert!(cycle.is_interactive());
		assert!(!close.is_interactive());
	}

	#[test]
	fn interactive_input_feeds_the_hook() {
		let registry = registry_with_interactive();
		let act = {
			struct Node;
			impl crate::parse::ConfigNode for Node {
				fn tag(&self) -> &str {
					"action"
				}
				fn attribute(&self, name: &str) -> Option<&str> {
					(name == "name").then_some("DirectionalCycleWindows")
				}
				fn text(&self) -> Option<&str> {
					None
				}
				fn children(&self) -> Vec<&dyn crate::parse::ConfigNode> {
					Vec::new()
				}
			}
			let ctx = crate::parse::ParseContext {
				parser: &(),
				document: &(),
			};
			registry.parse_node(ctx, &Node).expect("parses")
		};

		assert!(act.interactive_input(&23u32));
		assert!(act.interactive_input(&36u32));
		assert!(!act.interactive_input(&9u32), "escape ends the interaction");

		act.with_options(|options| {
			let keys = options
				.as_ref()
				.and_then(|o| o.downcast_ref::<Vec<u32>>())
				.expect("options present");
			assert_eq!(*keys, vec![23, 36, 9]);
		});

		act.interactive_cancel();
		act.with_options(|options| {
			let keys = options
				.as_ref()
				.and_then(|o| o.downcast_ref::<Vec<u32>>())
				.expect("options survive cancellation");
			assert!(keys.is_empty());
		});
	}

	#[test]
	#[should_panic(expected = "non-interactive action")]
	fn interactive_input_on_plain_action_is_fatal() {
		let registry = registry_with_interactive();
		let close = registry.parse_by_name("close").expect("registered");
		close.interactive_input(&0u32);
	}

	#[test]
	fn dropping_the_last_handle_drops_the_options() {
		struct Probe(Rc<Cell<u32>>);

		impl Drop for Probe {
			fn drop(&mut self) {
				self.0.set(self.0.get() + 1);
			}
		}

		let drops = Rc::new(Cell::new(0u32));
		let probe_drops = Rc::clone(&drops);

		let mut registry = ActionRegistry::new();
		registry.register(ActionReg {
			name: "MoveResizeTo".to_string(),
			scope: ActionScope::Client,
			setup: Box::new(move |_, _| Some(Box::new(Probe(Rc::clone(&probe_drops))))),
			run: Box::new(|_, _| {}),
			interactive_input: None,
			interactive_cancel: None,
		});

		struct Node;
		impl crate::parse::ConfigNode for Node {
			fn tag(&self) -> &str {
				"action"
			}
			fn attribute(&self, name: &str) -> Option<&str> {
				(name == "name").then_some("MoveResizeTo")
			}
			fn text(&self) -> Option<&str> {
				None
			}
			fn children(&self) -> Vec<&dyn crate::parse::ConfigNode> {
				Vec::new()
			}
		}

		let ctx = crate::parse::ParseContext {
			parser: &(),
			document: &(),
		};
		let act = registry.parse_node(ctx, &Node).expect("parses");

		let extra = Rc::clone(&act);
		let another = Rc::clone(&extra);
		drop(extra);
		drop(another);
		assert_eq!(drops.get(), 0, "live handles keep the options alive");

		drop(act);
		assert_eq!(drops.get(), 1, "last handle drops the options exactly once");
	}
}
