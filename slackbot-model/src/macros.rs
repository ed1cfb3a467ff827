//! Declarative model definition.
//!
//! [`model!`] generates, from a single field list: the serde struct (every
//! field an `Option`, unset fields skipped on serialization), the static
//! [`Schema`](crate::Schema) table used by the [`Args`](crate::Args)
//! builder, accessors that substitute declared defaults for never-assigned
//! fields, and a `PartialEq` over assigned-or-default values. Keeping both
//! representations in one declaration stops the struct and its schema
//! table from drifting apart.
//!
//! Field grammar:
//!
//! ```text
//! [@read_only] [@auto_list] name[("wire_name")]: Kind as RustType [= default],
//! ```
//!
//! `Kind` is a [`FieldKind`](crate::FieldKind) variant. Appending `: open`
//! to the struct name declares an open schema that retains unrecognized
//! incoming keys in an `extra` pass-through store.

/// Declares a typed model and its schema table.
#[macro_export]
macro_rules! model {
    // Open schema: unmatched incoming keys land in `extra`.
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : open {
            $(
                $(#[$fmeta:meta])*
                $(@ $flag:ident)*
                $field:ident $(($wire:literal))? : $kind:ident as $ty:ty $(= $default:expr)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, ::serde::Serialize, ::serde::Deserialize)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $(#[serde(rename = $wire)])?
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
            /// Pass-through store for keys no declared field matched.
            #[serde(flatten)]
            pub extra: $crate::Extra,
        }

        impl $name {
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            $($(
                /// Assigned value, or the declared default when unset.
                #[must_use]
                pub fn $field(&self) -> $ty {
                    self.$field.clone().unwrap_or_else(|| $default)
                }
            )?)*
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                true
                    $(&& $crate::__field_eq!(self.$field, other.$field $(, $default)?))*
                    && self.extra == other.extra
            }
        }

        impl $crate::Model for $name {
            const SCHEMA: &'static $crate::Schema = &$crate::Schema {
                name: stringify!($name),
                fields: &[
                    $(
                        $crate::FieldSpec::new(
                            $crate::__field_name!($field $(, $wire)?),
                            $crate::FieldKind::$kind,
                        )$(.$flag())*,
                    )*
                ],
                open: true,
            };
        }
    };

    // Closed schema: unknown incoming keys are ignored.
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $(@ $flag:ident)*
                $field:ident $(($wire:literal))? : $kind:ident as $ty:ty $(= $default:expr)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, ::serde::Serialize, ::serde::Deserialize)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $(#[serde(rename = $wire)])?
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            $($(
                /// Assigned value, or the declared default when unset.
                #[must_use]
                pub fn $field(&self) -> $ty {
                    self.$field.clone().unwrap_or_else(|| $default)
                }
            )?)*
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                true $(&& $crate::__field_eq!(self.$field, other.$field $(, $default)?))*
            }
        }

        impl $crate::Model for $name {
            const SCHEMA: &'static $crate::Schema = &$crate::Schema {
                name: stringify!($name),
                fields: &[
                    $(
                        $crate::FieldSpec::new(
                            $crate::__field_name!($field $(, $wire)?),
                            $crate::FieldKind::$kind,
                        )$(.$flag())*,
                    )*
                ],
                open: false,
            };
        }
    };
}

/// Collects keyword-style parameters into an [`Args`](crate::Args) set.
///
/// ```
/// use slackbot_model::args;
///
/// let a = args! { channel: "C024BE91L", count: 5, inclusive: true };
/// assert_eq!(a.get("count"), Some(&serde_json::json!(5)));
/// ```
#[macro_export]
macro_rules! args {
    () => { $crate::Args::new() };
    ( $( $name:ident : $value:expr ),+ $(,)? ) => {
        $crate::Args::new()$(.arg(stringify!($name), $value))+
    };
}

/// Wire name of a field: the explicit override when given, otherwise the
/// field identifier itself.
#[doc(hidden)]
#[macro_export]
macro_rules! __field_name {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident, $wire:literal) => {
        $wire
    };
}

/// Field comparison for the generated `PartialEq`: fields with a declared
/// default compare by assigned-or-default value.
#[doc(hidden)]
#[macro_export]
macro_rules! __field_eq {
    ($a:expr, $b:expr) => {
        $a == $b
    };
    ($a:expr, $b:expr, $default:expr) => {
        $a.clone().unwrap_or_else(|| $default) == $b.clone().unwrap_or_else(|| $default)
    };
}
