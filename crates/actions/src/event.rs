//! Input-side primitives carried by every dispatched event.

use std::any::Any;

/// What the user did to trigger a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserAction {
	/// A bound key was pressed.
	KeyboardKey,
	/// A pointer button went down.
	MousePress,
	/// A pointer button came back up.
	MouseRelease,
	/// A press and release on the same target.
	MouseClick,
	/// Two clicks within the double-click interval.
	MouseDoubleClick,
	/// The pointer moved with a button held.
	MouseMotion,
	/// A menu entry was activated.
	MenuSelection,
}

/// Server timestamp of the triggering input event, in milliseconds.
pub type Timestamp = u32;

bitflags::bitflags! {
	/// Modifier and pointer-button state at the time of the event.
	///
	/// Mirrors the window system's state field: keyboard modifiers in the
	/// low bits, pointer buttons above them.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct Modifiers: u16 {
		const SHIFT = 1 << 0;
		const LOCK = 1 << 1;
		const CONTROL = 1 << 2;
		const MOD1 = 1 << 3;
		const MOD2 = 1 << 4;
		const MOD3 = 1 << 5;
		const MOD4 = 1 << 6;
		const MOD5 = 1 << 7;
		const BUTTON1 = 1 << 8;
		const BUTTON2 = 1 << 9;
		const BUTTON3 = 1 << 10;
		const BUTTON4 = 1 << 11;
		const BUTTON5 = 1 << 12;
	}
}

/// The part of a window's frame (or of the root) an event originated from.
///
/// Only client-scoped actions see this; a binding on the titlebar and one on
/// a resize corner can dispatch the same action with different contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameContext {
	/// No particular frame element.
	None,
	/// The desktop background.
	Desktop,
	/// The root window itself.
	Root,
	/// The client area inside the decorations.
	Client,
	/// The titlebar.
	Titlebar,
	/// The decoration border as a whole.
	Frame,
	/// The top edge of the border.
	Top,
	/// The bottom edge of the border.
	Bottom,
	/// The left edge of the border.
	Left,
	/// The right edge of the border.
	Right,
	/// The top-left resize corner.
	TopLeftCorner,
	/// The top-right resize corner.
	TopRightCorner,
	/// The bottom-left resize corner.
	BottomLeftCorner,
	/// The bottom-right resize corner.
	BottomRightCorner,
	/// The maximize titlebar button.
	Maximize,
	/// The all-desktops (sticky) titlebar button.
	AllDesktops,
	/// The shade titlebar button.
	Shade,
	/// The iconify titlebar button.
	Iconify,
	/// The window icon in the titlebar.
	Icon,
	/// The close titlebar button.
	Close,
	/// Pseudo-context while an interactive move or resize is in progress.
	MoveResize,
}

/// Borrowed handle to the client window an action targets.
///
/// The client object model belongs to the window collaborator, not to this
/// crate; run hooks that need the concrete type downcast through [`Any`].
pub trait ClientWindow: Any {}
