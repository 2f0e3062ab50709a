//! Domain models and operation-specific parameter types.
//!
//! Entity models are converted into these types at the repository boundary.
//! Parameter types carry the (all-optional) attributes of a create or update
//! request and validate themselves into a field-keyed error map; update
//! validation runs against the merged (current + supplied) attribute set so
//! an omitted field keeps its prior value while an explicit blank is
//! rejected.

pub mod coupon;
pub mod game;
pub mod system_requirement;
pub mod user;

/// True when an optional text attribute is missing or whitespace-only.
pub(crate) fn blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}
