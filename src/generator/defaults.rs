//! Default property bags for newly created components.

use super::blocks::Block;
use crate::models::{ComponentKind, Properties};

/// Returns the default property bag of `kind`.
///
/// The values are the ones the renderer falls back on, so a component created
/// with these defaults renders exactly like one with an empty bag. Unknown
/// kinds get an empty bag.
pub fn defaults_for(kind: &ComponentKind) -> Properties {
    Block::default_for(kind).to_properties()
}
