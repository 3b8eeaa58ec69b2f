/// Normalizes a free-form status label so `Picked_Up`, `picked up` and `picked-up` compare equal.
pub fn normalize_label(input: &str) -> String {
    input
        .trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Defines a status label enum that never fails to parse.
///
/// # Syntax
/// ```ignore
/// define_labels! {
///     pub enum Name (default Variant) {
///         Variant => "label",
///         ...
///     }
/// }
/// ```
///
/// Every listed variant maps to exactly one label. Unknown labels are kept verbatim in an extra
/// `Other(String)` variant so that upstream data can never make deserialization fail.
/// The enum is (de)serialized through [std::fmt::Display] and [std::str::FromStr].
///
/// # Example
///
/// ```ignore
/// define_labels! {
///     pub enum JobStatus (default Created) {
///         Created => "created",
///         Completed => "completed",
///     }
/// }
///
/// assert_eq!("Completed".parse::<JobStatus>(), Ok(JobStatus::Completed));
/// ```
#[macro_export]
macro_rules! define_labels {
    ($(#[$meta:meta])* $vis:vis enum $name:ident (default $default:ident) {
        $($variant:ident => $label:literal),* $(,)?
    }) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde_with::SerializeDisplay,
            ::serde_with::DeserializeFromStr,
        )]
        $vis enum $name {
            $($variant,)*
            Other(String),
        }

        impl $name {
            pub fn label(&self) -> &str {
                match self {
                    $(Self::$variant => $label,)*
                    Self::Other(label) => label,
                }
            }
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(input: &str) -> Result<Self, Self::Err> {
                let label = $crate::macros::normalize_label(input);
                let status = match label.as_str() {
                    $($label => Self::$variant,)*
                    _ => Self::Other(input.trim().to_string()),
                };
                Ok(status)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.pad(self.label())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_separators_and_case() {
        assert_eq!(normalize_label(" Picked_Up "), "picked-up");
        assert_eq!(normalize_label("In Delivery"), "in-delivery");
        assert_eq!(normalize_label("completed"), "completed");
    }
}
