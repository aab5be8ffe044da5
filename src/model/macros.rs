/// Generate `as_str`, `Display`, `FromStr`, `From<T> for String` and
/// `TryFrom<String> for T` for a closed enum.
///
/// Unknown strings return an error. Add
/// `#[serde(into = "String", try_from = "String")]` to the enum to get
/// Serialize/Deserialize through these impls (the enum must be `Clone`).
macro_rules! string_enum {
    ($name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $str,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($str => Ok($name::$variant),)+
                    other => Err(format!("unknown {}: {other}", stringify!($name))),
                }
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> Self {
                v.as_str().to_string()
            }
        }

        impl TryFrom<String> for $name {
            type Error = String;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }
    };
}

/// Implement [`Parameters`](crate::model::params::Parameters) for a config
/// struct by listing its tunable fields with their numeric domain.
///
/// Field names double as parameter names. Fields must implement
/// [`ParamValue`](crate::model::params::ParamValue).
macro_rules! config_parameters {
    ($name:ident { $($field:ident: $domain:ident),+ $(,)? }) => {
        impl $crate::model::params::Parameters for $name {
            fn specs(&self) -> &'static [$crate::model::params::ParamSpec] {
                const SPECS: &[$crate::model::params::ParamSpec] = &[$(
                    $crate::model::params::ParamSpec {
                        name: stringify!($field),
                        domain: $crate::model::params::Domain::$domain,
                    },
                )+];
                SPECS
            }

            fn get(&self, name: &str) -> Option<f64> {
                use $crate::model::params::ParamValue;
                $(if name == stringify!($field) {
                    return Some(self.$field.to_f64());
                })+
                None
            }

            fn assign(&mut self, name: &str, value: f64) {
                $(if name == stringify!($field) {
                    self.$field = $crate::model::params::ParamValue::from_f64(value);
                    return;
                })+
                ::tracing::warn!("{} has no parameter `{}`", stringify!($name), name);
            }
        }
    };
}
