use crate::error::ConstructError;

/// Fallible duplication for element types.
///
/// The list never clones elements implicitly; every deep copy —
/// [`from_elem`], [`try_clone`], [`try_clone_from`] — goes through this
/// trait so that an element type whose duplication can fail (one owning
/// bounded storage of its own, say) makes the whole operation fail
/// cleanly instead of aborting.
///
/// Duplication of the plain payload types is infallible and provided
/// below. Implement the trait by hand for types that can refuse.
///
/// [`from_elem`]: crate::List::from_elem
/// [`try_clone`]: crate::List::try_clone
/// [`try_clone_from`]: crate::List::try_clone_from
pub trait TryClone: Sized {
    fn try_clone(&self) -> Result<Self, ConstructError>;
}

/// Fallible default construction for element types.
///
/// Counterpart of [`TryClone`] for the default-valued insertions
/// ([`push_default`], [`from_default`]).
///
/// [`push_default`]: crate::List::push_default
/// [`from_default`]: crate::List::from_default
pub trait TryDefault: Sized {
    fn try_default() -> Result<Self, ConstructError>;
}

macro_rules! impl_infallible {
    ($($t:ty)*) => {
        $(
            impl TryClone for $t {
                fn try_clone(&self) -> Result<Self, ConstructError> {
                    Ok(self.clone())
                }
            }

            impl TryDefault for $t {
                fn try_default() -> Result<Self, ConstructError> {
                    Ok(<$t>::default())
                }
            }
        )*
    };
}

impl_infallible! {
    () usize u8 u16 u32 u64 u128
    isize i8 i16 i32 i64 i128
    f32 f64
    bool char
    String
}

impl<T> TryClone for &T {
    fn try_clone(&self) -> Result<Self, ConstructError> {
        Ok(*self)
    }
}

impl<T: TryClone> TryClone for Option<T> {
    fn try_clone(&self) -> Result<Self, ConstructError> {
        self.as_ref().map(T::try_clone).transpose()
    }
}

impl<T> TryDefault for Option<T> {
    fn try_default() -> Result<Self, ConstructError> {
        Ok(None)
    }
}
