//! Action definitions and the hook set every implementor supplies.

use std::any::Any;
use std::fmt;

use crate::dispatch::ActionEvent;
use crate::parse::{ConfigNode, ParseContext};

/// Per-use options produced by a definition's setup hook.
///
/// The value is opaque to this crate: run hooks downcast it back to whatever
/// concrete type their setup hook produced. It is dropped exactly once, when
/// the last handle to the owning instance goes away.
pub type Options = Box<dyn Any>;

/// Builds the per-use options for one parsed configuration entry.
///
/// Receives the parser pass-through handles and the child nodes of the
/// `<action>` element. May return `None`: an action with no per-use settings
/// is perfectly valid, and so is a setup hook that gives up on bad input.
pub type SetupFn = Box<dyn Fn(ParseContext<'_>, &[&dyn ConfigNode]) -> Option<Options>>;

/// Executes the action against one runtime event.
pub type RunFn = Box<dyn Fn(&ActionEvent<'_>, &mut Option<Options>)>;

/// Feeds one raw input event to an interactive action in progress.
///
/// The event type is owned by the input collaborator and routed through
/// untouched. Returns true while the action wants further input.
pub type InteractiveInputFn = Box<dyn Fn(&dyn Any, &mut Option<Options>) -> bool>;

/// Aborts an interactive action in progress.
pub type InteractiveCancelFn = Box<dyn Fn(&mut Option<Options>)>;

/// The hook pair that makes an action kind interactive.
///
/// Interactive actions span multiple input events (keyboard-driven window
/// cycling, say): after the initial dispatch the event loop feeds further
/// input to `input` until the action finishes or `cancel` aborts it.
pub struct InteractiveHooks {
	pub input: InteractiveInputFn,
	pub cancel: InteractiveCancelFn,
}

/// Whether an action addresses the whole session or one client window.
///
/// The dispatcher copies this discriminant into the event record it builds,
/// which decides whether the target fields get populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionScope {
	/// Runs without a target window (desktop switching, launching, ...).
	Global,
	/// Runs against a specific client window (close, move, resize, ...).
	Client,
}

/// A registered action kind: its name, scope, and behavior hooks.
///
/// Definitions are owned by the [`ActionRegistry`] and shared with every
/// [`Action`] instance parsed from configuration, so a definition lives at
/// least as long as the last instance bound to it.
///
/// [`ActionRegistry`]: crate::ActionRegistry
/// [`Action`]: crate::Action
pub struct ActionDef {
	pub(crate) name: String,
	pub(crate) scope: ActionScope,
	pub(crate) setup: SetupFn,
	pub(crate) run: RunFn,
	pub(crate) interactive: Option<InteractiveHooks>,
}

impl ActionDef {
	/// The name this definition was registered under, original casing.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Whether instances of this kind target a client window.
	pub fn scope(&self) -> ActionScope {
		self.scope
	}

	/// True iff this kind was registered with the interactive hook pair.
	pub fn is_interactive(&self) -> bool {
		self.interactive.is_some()
	}

	pub(crate) fn interactive(&self) -> Option<&InteractiveHooks> {
		self.interactive.as_ref()
	}
}

impl fmt::Debug for ActionDef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ActionDef")
			.field("name", &self.name)
			.field("scope", &self.scope)
			.field("interactive", &self.interactive.is_some())
			.finish_non_exhaustive()
	}
}

/// Registration arguments for [`ActionRegistry::register`].
///
/// The interactive hooks are separate fields so the registry can enforce the
/// all-or-nothing contract at the boundary; past it they live as one
/// [`InteractiveHooks`] pair.
///
/// [`ActionRegistry::register`]: crate::ActionRegistry::register
pub struct ActionReg {
	pub name: String,
	pub scope: ActionScope,
	pub setup: SetupFn,
	pub run: RunFn,
	pub interactive_input: Option<InteractiveInputFn>,
	pub interactive_cancel: Option<InteractiveCancelFn>,
}
