//! Named array types: `define_array!`.
//!
//! [`DynArr`](crate::DynArr) is the generic surface; this macro is the
//! second instantiation surface, for codebases that want a domain-named
//! array type per element type. The generated struct wraps a `DynArr` and
//! derefs to it, so the whole operation set is available unchanged. Two
//! extras are only possible on this surface: trailing user-defined fields
//! carried alongside the array (opaque to every array operation) and an
//! `init = N` override of the growth seed baked into the type.

/// Defines a named array type over a fixed element type.
///
/// ```
/// use dynarr::define_array;
///
/// define_array! {
///     /// Paths collected from the command line.
///     pub struct PathList(std::path::PathBuf);
/// }
///
/// define_array! {
///     /// Samples plus the probe they came from.
///     pub struct SampleBuf(f32; init = 16) {
///         /// Probe label, set once at construction.
///         pub probe: &'static str,
///     }
/// }
///
/// let mut paths = PathList::new();
/// paths.push("/tmp".into());
/// assert_eq!(paths.len(), 1);
///
/// let mut samples = SampleBuf::new("probe-a");
/// samples.push(0.5);
/// assert_eq!(samples.capacity(), 16);
/// assert_eq!(samples.probe, "probe-a");
/// ```
///
/// The field-less form gets a `const fn new()` and a `Default` impl; the
/// form with trailing fields gets `new(...)` taking one argument per field,
/// in declaration order.
#[macro_export]
macro_rules! define_array {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($elem:ty $(; init = $seed:expr)?);
    ) => {
        $(#[$meta])*
        $vis struct $name {
            items: $crate::DynArr<$elem, { $crate::__dynarr_seed!($($seed)?) }>,
        }

        impl $name {
            /// Creates an empty array in the zero state. Allocates nothing.
            $vis const fn new() -> Self {
                Self {
                    items: $crate::DynArr::new(),
                }
            }
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::core::ops::Deref for $name {
            type Target = $crate::DynArr<$elem, { $crate::__dynarr_seed!($($seed)?) }>;

            fn deref(&self) -> &Self::Target {
                &self.items
            }
        }

        impl ::core::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.items
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($elem:ty $(; init = $seed:expr)?) {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $field_ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            items: $crate::DynArr<$elem, { $crate::__dynarr_seed!($($seed)?) }>,
            $(
                $(#[$field_meta])*
                $field_vis $field: $field_ty,
            )*
        }

        impl $name {
            /// Creates an empty array alongside the given trailing fields.
            $vis fn new($($field: $field_ty),*) -> Self {
                Self {
                    items: $crate::DynArr::new(),
                    $($field,)*
                }
            }
        }

        impl ::core::ops::Deref for $name {
            type Target = $crate::DynArr<$elem, { $crate::__dynarr_seed!($($seed)?) }>;

            fn deref(&self) -> &Self::Target {
                &self.items
            }
        }

        impl ::core::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.items
            }
        }
    };
}

/// Seed selection for `define_array!`: the given expression, or the crate
/// default when omitted.
#[doc(hidden)]
#[macro_export]
macro_rules! __dynarr_seed {
    () => {
        $crate::DEFAULT_INIT_CAP
    };
    ($seed:expr) => {
        $seed
    };
}
