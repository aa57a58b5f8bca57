#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use grammatical_gender::*;

mod grammatical_gender;

/// A value of a resource qualifier.
///
/// Every qualifier enum has a canonical string form that appears in resource
/// directory names (for example the `feminine` in `values-feminine`), and a
/// pair of labels for showing the value to people.
///
/// # Example
///
/// ```
/// use android_resources::ResourceEnum;
///
/// #[derive(Clone, Copy)]
/// enum NightMode {
///     Day,
///     Night,
/// }
///
/// impl ResourceEnum for NightMode {
///     fn resource_value(&self) -> &'static str {
///         match self {
///             NightMode::Day => "notnight",
///             NightMode::Night => "night",
///         }
///     }
///
///     fn short_display_value(&self) -> &'static str {
///         match self {
///             NightMode::Day => "Not Night",
///             NightMode::Night => "Night",
///         }
///     }
///
///     fn long_display_value(&self) -> &'static str {
///         match self {
///             NightMode::Day => "Day time",
///             NightMode::Night => "Night time",
///         }
///     }
/// }
///
/// assert_eq!("night", NightMode::Night.resource_value());
/// assert!(!NightMode::Day.is_fake_value());
/// assert!(NightMode::Day.is_valid_value_for_device());
/// ```
pub trait ResourceEnum {
    /// Get the qualifier string used in resource directory names.
    ///
    /// The returned value should be lower case.
    #[must_use]
    fn resource_value(&self) -> &'static str;

    /// Get a short human-readable label.
    #[must_use]
    fn short_display_value(&self) -> &'static str;

    /// Get a long human-readable label.
    #[must_use]
    fn long_display_value(&self) -> &'static str;

    /// Whether this value is a placeholder that never appears in a real
    /// resource directory name.
    #[must_use]
    fn is_fake_value(&self) -> bool {
        false
    }

    /// Whether a device can be configured with this value.
    #[must_use]
    fn is_valid_value_for_device(&self) -> bool {
        true
    }
}
