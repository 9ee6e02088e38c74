//! Closed-set string tokens.

/// Declare an enumeration of wire tokens.
///
/// The generated enum carries an extra `Unknown(String)` variant. Whether a
/// document may produce it is decided by
/// [`MapperConfig::unknown_enums`](crate::MapperConfig): the default policy
/// rejects unknown tokens, `Preserve` keeps them verbatim so they
/// re-serialize unchanged. Serde (de)serializes the enum as its token and
/// always preserves unknown tokens.
///
/// ```
/// recurly_xml::wire_enum! {
///     /// Billing interval unit.
///     pub enum IntervalUnit {
///         /// Days.
///         Days = "days",
///         /// Months.
///         Months = "months",
///     }
/// }
///
/// assert_eq!(IntervalUnit::from_token("months"), Some(IntervalUnit::Months));
/// assert_eq!(IntervalUnit::Days.as_str(), "days");
/// assert!(IntervalUnit::from(String::from("weeks")).is_unknown());
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A token outside the known set, kept verbatim.
            Unknown(String),
        }

        impl $name {
            /// Every token this enumeration recognises.
            pub const TOKENS: &'static [&'static str] = &[$($token),+];

            /// Look up a known token.
            #[must_use]
            pub fn from_token(token: &str) -> Option<Self> {
                match token {
                    $( $token => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// The wire token.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $token, )+
                    Self::Unknown(token) => token,
                }
            }

            /// Whether the token is outside the known set.
            #[must_use]
            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::convert::From<String> for $name {
            fn from(token: String) -> Self {
                Self::from_token(&token).unwrap_or(Self::Unknown(token))
            }
        }

        impl ::std::convert::From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl $crate::XmlValue for $name {
            const TYPE_HINT: Option<&'static str> = None;
            const EXPECTED: &'static str = stringify!($name);

            fn from_text(
                text: &str,
                config: &$crate::MapperConfig,
            ) -> ::std::result::Result<Self, $crate::ValueError> {
                if let Some(value) = Self::from_token(text) {
                    return Ok(value);
                }
                match config.unknown_enums {
                    $crate::UnknownEnumPolicy::Reject => Err($crate::ValueError::UnknownToken),
                    $crate::UnknownEnumPolicy::Preserve => Ok(Self::Unknown(text.to_string())),
                }
            }

            fn to_text(&self) -> String {
                self.as_str().to_string()
            }
        }
    };
}
