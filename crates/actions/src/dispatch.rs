//! Uniform invocation of parsed actions against runtime events.

use std::rc::Rc;

use crate::action::Action;
use crate::definition::ActionScope;
use crate::event::{ClientWindow, FrameContext, Modifiers, Timestamp, UserAction};

/// Everything the event loop knows at dispatch time.
///
/// One value serves a whole binding's action list; the dispatcher copies it
/// into a fresh [`ActionEvent`] for every instance it fires.
#[derive(Clone, Copy)]
pub struct DispatchArgs<'a> {
	pub user_action: UserAction,
	pub time: Timestamp,
	pub modifiers: Modifiers,
	pub x: i32,
	pub y: i32,
	/// Frame element the event originated from; only client-scoped actions
	/// ever see it.
	pub context: FrameContext,
	/// Window under the event, when there is one.
	pub client: Option<&'a dyn ClientWindow>,
}

/// The per-dispatch record a run hook receives.
///
/// Built fresh for each instance; the target half is shaped by the
/// instance's definition scope, so a global action cannot even observe
/// client fields.
#[derive(Clone, Copy)]
pub struct ActionEvent<'a> {
	pub user_action: UserAction,
	pub time: Timestamp,
	pub modifiers: Modifiers,
	pub x: i32,
	pub y: i32,
	pub target: EventTarget<'a>,
}

impl<'a> ActionEvent<'a> {
	/// The target window, for client-scoped events.
	pub fn client(&self) -> Option<&'a dyn ClientWindow> {
		match self.target {
			EventTarget::Client { client, .. } => client,
			EventTarget::Global => None,
		}
	}

	/// The frame context, for client-scoped events.
	pub fn context(&self) -> Option<FrameContext> {
		match self.target {
			EventTarget::Client { context, .. } => Some(context),
			EventTarget::Global => None,
		}
	}
}

/// Kind-specific half of the event record, chosen by the definition scope.
#[derive(Clone, Copy)]
pub enum EventTarget<'a> {
	/// Global actions carry no target.
	Global,
	/// Client actions see where on the frame the event landed and which
	/// window it landed on. The window reference is borrowed, never owned,
	/// and may be absent (a key binding can fire with nothing focused).
	Client {
		context: FrameContext,
		client: Option<&'a dyn ClientWindow>,
	},
}

/// Fires every instance in `actions`, in order, against one runtime event.
///
/// The order is the caller's: actions fire exactly as configuration listed
/// them, with no reordering and no deduplication. The dispatcher neither
/// inspects results nor stops early, so an earlier action can invalidate
/// what a later one sees (closing the target window, say); that risk stays
/// with the caller.
pub fn run_actions(actions: &[Rc<Action>], args: &DispatchArgs<'_>) {
	for act in actions {
		let target = match act.def().scope() {
			ActionScope::Global => EventTarget::Global,
			ActionScope::Client => EventTarget::Client {
				context: args.context,
				client: args.client,
			},
		};
		let event = ActionEvent {
			user_action: args.user_action,
			time: args.time,
			modifiers: args.modifiers,
			x: args.x,
			y: args.y,
			target,
		};

		act.with_options(|options| (act.def().run)(&event, options));
	}
}
