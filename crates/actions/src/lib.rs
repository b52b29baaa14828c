//! Action registration, configuration parsing and dispatch for the Cornice
//! window manager.
//!
//! Everything the window manager can be told to do — close a window, switch
//! desktops, launch a program — is an *action*. This crate owns the contract
//! between the three parties involved:
//!
//! - implementors register a named [`ActionDef`] carrying behavior hooks
//!   with the [`ActionRegistry`];
//! - the configuration parser turns each `<action name="...">` element into
//!   a shared [`Action`] instance carrying that use's options
//!   ([`ActionRegistry::parse_node`]);
//! - the event loop hands ordered lists of instances to [`run_actions`]
//!   whenever a binding fires, and routes follow-up input to interactive
//!   instances through [`Action::interactive_input`].
//!
//! None of the surrounding machinery lives here: the configuration tree, the
//! raw input events, and the client object model all appear as opaque seams
//! ([`ConfigNode`], `Any` handles, [`ClientWindow`]).

mod action;
mod definition;
mod dispatch;
mod error;
mod event;
mod parse;
mod registry;

pub use action::Action;
pub use definition::{
	ActionDef, ActionReg, ActionScope, InteractiveCancelFn, InteractiveHooks, InteractiveInputFn,
	Options, RunFn, SetupFn,
};
pub use dispatch::{ActionEvent, DispatchArgs, EventTarget, run_actions};
pub use error::ParseError;
pub use event::{ClientWindow, FrameContext, Modifiers, Timestamp, UserAction};
pub use parse::{ConfigNode, ParseContext};
pub use registry::ActionRegistry;
