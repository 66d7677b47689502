//! Macros for declaring status and event vocabularies.

/// Generate a `Status` implementation for a simple enum.
///
/// Extra attributes are applied after the generated derives, so serde
/// attributes such as `rename_all` can be passed through.
///
/// # Example
///
/// ```
/// use onboarding_lifecycle::core::Status;
/// use onboarding_lifecycle::status_enum;
///
/// status_enum! {
///     #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
///     pub enum TicketStatus {
///         Open,
///         InProgress,
///         Done,
///         Cancelled,
///     }
///     final: [Done, Cancelled]
///     error: [Cancelled]
/// }
///
/// assert_eq!(TicketStatus::all().len(), 4);
/// assert_eq!(TicketStatus::InProgress.name(), "InProgress");
/// assert!(TicketStatus::Cancelled.is_error());
/// ```
#[macro_export]
macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Status for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn all() -> &'static [Self] {
                &[$(Self::$variant),*]
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}

/// Generate an `Event` implementation for a simple enum.
///
/// # Example
///
/// ```
/// use onboarding_lifecycle::core::Event;
/// use onboarding_lifecycle::event_enum;
///
/// event_enum! {
///     pub enum TicketEvent {
///         Start,
///         Finish,
///     }
/// }
///
/// assert_eq!(TicketEvent::Finish.name(), "Finish");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
