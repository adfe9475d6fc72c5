//! Macro for declaring integer-coded option domains.

/// Declare an option enum whose variants map to fixed `i32` codes.
///
/// Generates `ALL`, `code()`, `from_code()`, `name()`, a `Display` impl and
/// `From<Enum> for i32`, so typed options can be handed to any builder step
/// that takes a raw code.
macro_rules! option_codes {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $code:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every option, in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];

            /// Integer code of this option.
            pub fn code(self) -> i32 {
                match self {
                    $(Self::$variant => $code),*
                }
            }

            /// Look up the option for `code`, if it is known.
            pub fn from_code(code: i32) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Get the option's name for display/logging.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl From<$name> for i32 {
            fn from(option: $name) -> i32 {
                option.code()
            }
        }
    };
}

pub(crate) use option_codes;
