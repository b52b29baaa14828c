//! Turning declarative configuration entries into action instances.

use std::any::Any;
use std::rc::Rc;

use crate::action::Action;
use crate::error::ParseError;
use crate::registry::ActionRegistry;

/// Read-only view of one element in the declarative configuration tree.
///
/// The tree itself is owned and parsed by the configuration collaborator;
/// this crate reads only the `name` attribute of action elements. The rest
/// of the surface exists for setup hooks, which walk their child nodes to
/// pull out per-action settings.
pub trait ConfigNode {
	/// Element name, e.g. `action` or `command`.
	fn tag(&self) -> &str;

	/// Value of the named attribute, if present.
	fn attribute(&self, name: &str) -> Option<&str>;

	/// Text content of a leaf element.
	fn text(&self) -> Option<&str>;

	/// Child elements in document order.
	fn children(&self) -> Vec<&dyn ConfigNode>;
}

/// Borrowed parser state passed through to setup hooks untouched.
///
/// Both handles belong to the configuration collaborator; this crate never
/// looks inside them. Setup hooks that need them downcast to the concrete
/// types they share with that collaborator.
#[derive(Clone, Copy)]
pub struct ParseContext<'a> {
	/// The parser instance driving the current load.
	pub parser: &'a dyn Any,
	/// The document the nodes being parsed belong to.
	pub document: &'a dyn Any,
}

impl ActionRegistry {
	/// Looks up `name` and binds a new instance with empty options.
	pub fn try_parse_by_name(&self, name: &str) -> Result<Rc<Action>, ParseError> {
		let def = self
			.lookup(name)
			.ok_or_else(|| ParseError::UnknownAction(name.to_string()))?;
		Ok(Action::new(def))
	}

	/// [`try_parse_by_name`] with the diagnostic policy applied: an unknown
	/// name is reported and yields `None`, so one bad reference does not
	/// abort loading the rest of the configuration.
	///
	/// [`try_parse_by_name`]: ActionRegistry::try_parse_by_name
	pub fn parse_by_name(&self, name: &str) -> Option<Rc<Action>> {
		match self.try_parse_by_name(name) {
			Ok(act) => Some(act),
			Err(err) => {
				tracing::warn!("{err}");
				None
			}
		}
	}

	/// Parses one `<action name="...">` element into an instance.
	///
	/// On success the definition's setup hook has run exactly once, over the
	/// element's child nodes, and its result is stored as the instance's
	/// options. A hook returning `None` is accepted as-is: whether an action
	/// is meaningful without options is that action's own business.
	pub fn try_parse_node(
		&self,
		ctx: ParseContext<'_>,
		node: &dyn ConfigNode,
	) -> Result<Rc<Action>, ParseError> {
		let name = node.attribute("name").ok_or(ParseError::MissingName)?;
		let act = self.try_parse_by_name(name)?;

		let children = node.children();
		act.set_options((act.def().setup)(ctx, children.as_slice()));
		Ok(act)
	}

	/// [`try_parse_node`] with the diagnostic policy applied: an element
	/// without a `name` attribute is skipped silently, an unknown name is
	/// reported; both yield `None`.
	///
	/// [`try_parse_node`]: ActionRegistry::try_parse_node
	pub fn parse_node(&self, ctx: ParseContext<'_>, node: &dyn ConfigNode) -> Option<Rc<Action>> {
		match self.try_parse_node(ctx, node) {
			Ok(act) => Some(act),
			Err(ParseError::MissingName) => None,
			Err(err) => {
				tracing::warn!("{err}");
				None
			}
		}
	}
}
