//!
//! The hierarchical key-value store.
//!

pub mod json;
pub mod memory;

use crate::settings::value::Value;

///
/// The hierarchical key-value store.
///
/// Keys are addressed by a named group and a key within it.
///
pub trait Store {
    ///
    /// Returns the value, if it is present.
    ///
    fn value(&self, group: &str, key: &str) -> Option<Value>;

    ///
    /// Sets the value, replacing the previous one.
    ///
    fn set_value(&mut self, group: &str, key: &str, value: Value);

    ///
    /// Removes the group with all its keys. Removing a missing group is a no-op.
    ///
    fn remove_group(&mut self, group: &str);
}
