// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Single-child holder

use crate::WidgetId;

/// Holder for at most one child
///
/// Used by [`crate::Bin`], [`crate::Frame`] and [`crate::Viewport`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Slot(Option<WidgetId>);

impl Slot {
    /// The child, if any
    #[inline]
    pub fn get(&self) -> Option<WidgetId> {
        self.0
    }

    /// True if the slot holds nothing
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Store `child`, returning the previous occupant
    pub(crate) fn set(&mut self, child: WidgetId) -> Option<WidgetId> {
        self.0.replace(child)
    }

    /// Clear the slot if it holds `child`
    pub(crate) fn remove(&mut self, child: WidgetId) -> bool {
        if self.0 == Some(child) {
            self.0 = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn holds_one() {
        let mut ids = SlotMap::<WidgetId, ()>::with_key();
        let (a, b) = (ids.insert(()), ids.insert(()));

        let mut slot = Slot::default();
        assert!(slot.is_empty());
        assert_eq!(slot.set(a), None);
        assert_eq!(slot.set(b), Some(a));
        assert!(!slot.remove(a));
        assert!(slot.remove(b));
        assert_eq!(slot.get(), None);
    }
}
