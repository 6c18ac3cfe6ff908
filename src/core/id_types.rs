//! The `define_id_types` macro.

/// Defines types that consist of a single i8-valued ID in `0..COUNT`.
///
/// You specify for each such type its name and the number of distinct
/// values of the type. We use these types for the parts of a Sudoku grid.
#[macro_export]
macro_rules! define_id_types {
    (
        $(
            $(#[$outer:meta])*
            $type_name:ident[$count:expr];
        )*
    ) => {
        $(
            #[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
            $(#[$outer])*
            pub struct $type_name(i8);

            impl $type_name {
                /// The number of distinct values of this type.
                pub const COUNT: usize = $count;

                /// Makes a new value given its ID, which the caller must
                /// ensure is in range.
                ///
                /// # Safety
                ///
                /// Callers must ensure the argument is in `0..COUNT`.
                pub const unsafe fn new_unchecked(id: i8) -> Self {
                    $type_name(id)
                }

                /// Makes a new value given its ID, if it's in `0..COUNT`.
                pub const fn new(id: i8) -> Option<Self> {
                    if id >= 0 && id < $count {
                        Some($type_name(id))
                    } else {
                        None
                    }
                }

                /// Returns this value's ID.
                pub const fn get(self) -> i8 {
                    self.0
                }

                /// Returns this value's ordinal number, which starts at 1.
                pub const fn ordinal(self) -> i8 {
                    self.0 + 1
                }

                /// Returns this value's ID in a form suitable for use as an
                /// array index.
                pub const fn index(self) -> usize {
                    self.0 as usize
                }

                /// Iterates all distinct values of this type.
                pub fn all() -> impl Iterator<Item = Self> {
                    (0..$count).map(|id| unsafe { Self::new_unchecked(id) })
                }
            }
        )*
    };
}
