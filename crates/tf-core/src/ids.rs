//! Strongly typed, zero-cost identifier wrappers.
//!
//! Both ids are 1-based: customer ids count arrivals from 1, teller ids run
//! `1..=teller_count`.  Use [`TellerId::slot`] to index a teller `Vec`.

use std::fmt;

/// Generate a typed 1-based ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The first id handed out in a run.
            pub const FIRST: $name = $name(1);

            /// Zero-based position, for direct use as a `Vec` index.
            #[inline(always)]
            pub fn slot(self) -> usize {
                self.0 as usize - 1
            }

            /// Like [`slot`](Self::slot), but `None` for the invalid id 0.
            #[inline(always)]
            pub fn slot_checked(self) -> Option<usize> {
                (self.0 as usize).checked_sub(1)
            }

            /// Inverse of [`slot`](Self::slot).
            #[inline(always)]
            pub fn from_slot(slot: usize) -> $name {
                $name(slot as $inner + 1)
            }

            /// The id following `self`.
            #[inline(always)]
            pub fn next(self) -> $name {
                $name(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }
    };
}

typed_id! {
    /// Customer number, assigned on arrival (balked customers consume one too).
    pub struct CustomerId(u32);
}

typed_id! {
    /// Teller number, fixed for the whole run.
    pub struct TellerId(u32);
}
