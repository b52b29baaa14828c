use thiserror::Error;

/// Errors surfaced while turning configuration entries into action instances.
///
/// The `try_` parsing entry points return these directly. The plain entry
/// points ([`parse_by_name`], [`parse_node`]) apply the diagnostic policy and
/// fold them back into `Option`, so one bad configuration entry never aborts
/// loading the rest.
///
/// [`parse_by_name`]: crate::ActionRegistry::parse_by_name
/// [`parse_node`]: crate::ActionRegistry::parse_node
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
	/// The configuration named an action no implementor registered.
	#[error("invalid action \"{0}\" requested, no such action exists")]
	UnknownAction(String),
	/// The action node carries no `name` attribute.
	#[error("action node is missing its name attribute")]
	MissingName,
}
