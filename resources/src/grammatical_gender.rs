//! The grammatical gender resource qualifier.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ResourceEnum;

/// The grammatical gender of the user, used to select resources such as
/// `values-feminine`.
///
/// Variants are declared in ordinal order. The ordinal is stable and is what
/// [`GrammaticalGender::index_of`] and [`GrammaticalGender::by_index`] use.
///
/// # Example
///
/// ```
/// use android_resources::GrammaticalGender;
///
/// let gender: GrammaticalGender = "masculine".parse().unwrap();
/// assert_eq!(GrammaticalGender::Masculine, gender);
/// assert_eq!("masculine", gender.to_string());
/// assert!("Masculine".parse::<GrammaticalGender>().is_err());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum GrammaticalGender {
    Neuter,
    Feminine,
    Masculine,
}

#[cfg(feature = "perfect-hash")]
static QUALIFIERS: phf::Map<&'static str, GrammaticalGender> = phf::phf_map! {
    "neuter" => GrammaticalGender::Neuter,
    "feminine" => GrammaticalGender::Feminine,
    "masculine" => GrammaticalGender::Masculine,
};

impl GrammaticalGender {
    /// All variants in ordinal order.
    pub const ALL: [GrammaticalGender; 3] =
        [GrammaticalGender::Neuter, GrammaticalGender::Feminine, GrammaticalGender::Masculine];

    /// Iterate over all variants in ordinal order.
    pub fn iter() -> impl ExactSizeIterator<Item = GrammaticalGender> {
        Self::ALL.into_iter()
    }

    /// Get the qualifier value as a `&'static str`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            GrammaticalGender::Neuter => "neuter",
            GrammaticalGender::Feminine => "feminine",
            GrammaticalGender::Masculine => "masculine",
        }
    }

    /// Find the variant whose qualifier value is exactly `value`.
    ///
    /// Matching is case sensitive. Returns `None` if nothing matches.
    ///
    /// ```
    /// use android_resources::GrammaticalGender;
    ///
    /// assert_eq!(Some(GrammaticalGender::Neuter), GrammaticalGender::from_qualifier("neuter"));
    /// assert_eq!(None, GrammaticalGender::from_qualifier("NEUTER"));
    /// ```
    #[must_use]
    pub fn from_qualifier(value: &str) -> Option<Self> {
        #[cfg(feature = "perfect-hash")]
        let found = QUALIFIERS.get(value).copied();
        #[cfg(not(feature = "perfect-hash"))]
        let found = Self::iter().find(|gender| gender.name() == value);

        if found.is_none() {
            tracing::trace!(value, "no grammatical gender for qualifier");
        }
        found
    }

    /// Get the ordinal of this variant.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Get the ordinal of `value`, or `-1` if there is no value.
    #[must_use]
    pub fn index_of(value: Option<Self>) -> i32 {
        // At most 3 variants, so this always fits.
        value.map_or(-1, |gender| gender.index() as i32)
    }

    /// Get the variant at ordinal `index`, or `None` if `index` is out of
    /// range.
    #[must_use]
    pub fn by_index(index: i32) -> Option<Self> {
        let found = usize::try_from(index).ok().and_then(|i| Self::ALL.get(i)).copied();
        if found.is_none() {
            tracing::trace!(index, "grammatical gender index out of range");
        }
        found
    }
}

impl ResourceEnum for GrammaticalGender {
    fn resource_value(&self) -> &'static str {
        self.name()
    }

    fn short_display_value(&self) -> &'static str {
        match self {
            GrammaticalGender::Neuter => "Neuter",
            GrammaticalGender::Feminine => "Feminine",
            GrammaticalGender::Masculine => "Masculine",
        }
    }

    fn long_display_value(&self) -> &'static str {
        match self {
            GrammaticalGender::Neuter => "Neuter",
            GrammaticalGender::Feminine => "Feminine",
            GrammaticalGender::Masculine => "Masculine",
        }
    }

    fn is_fake_value(&self) -> bool {
        false
    }

    fn is_valid_value_for_device(&self) -> bool {
        true
    }
}

impl From<GrammaticalGender> for &'static str {
    fn from(value: GrammaticalGender) -> Self {
        value.name()
    }
}

impl AsRef<str> for GrammaticalGender {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

impl fmt::Display for GrammaticalGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An error that is returned when a string is not a grammatical gender
/// qualifier.
#[derive(Debug, thiserror::Error)]
#[error("Unknown grammatical gender {0:?}")]
pub struct UnknownGrammaticalGender(pub String);

impl FromStr for GrammaticalGender {
    type Err = UnknownGrammaticalGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_qualifier(s).ok_or_else(|| UnknownGrammaticalGender(s.to_owned()))
    }
}

impl TryFrom<&str> for GrammaticalGender {
    type Error = UnknownGrammaticalGender;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// An error that is returned when an ordinal does not name a grammatical
/// gender.
#[derive(Debug, thiserror::Error)]
#[error("No grammatical gender at index {0}")]
pub struct InvalidGrammaticalGenderIndex(pub i32);

impl TryFrom<i32> for GrammaticalGender {
    type Error = InvalidGrammaticalGenderIndex;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::by_index(value).ok_or(InvalidGrammaticalGenderIndex(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_are_in_ordinal_order() {
        let qualifiers: Vec<_> = GrammaticalGender::iter().map(|g| g.resource_value()).collect();
        assert_eq!(vec!["neuter", "feminine", "masculine"], qualifiers);
        for (i, gender) in GrammaticalGender::iter().enumerate() {
            assert_eq!(i, gender.index());
        }
    }

    #[test]
    fn from_qualifier_finds_every_variant() {
        for gender in GrammaticalGender::ALL {
            assert_eq!(Some(gender), GrammaticalGender::from_qualifier(gender.resource_value()));
        }
        assert_eq!(
            Some(GrammaticalGender::Feminine),
            GrammaticalGender::from_qualifier("feminine")
        );
        assert_eq!(1, GrammaticalGender::index_of(Some(GrammaticalGender::Feminine)));
    }

    #[test]
    fn from_qualifier_rejects_unknown_values() {
        for value in ["epicene", "", "Neuter", "FEMININE", " masculine", "masc"] {
            assert_eq!(None, GrammaticalGender::from_qualifier(value), "{value:?} should not match");
        }
    }

    #[test]
    fn index_round_trips() {
        for gender in GrammaticalGender::ALL {
            let index = GrammaticalGender::index_of(Some(gender));
            assert_eq!(Some(gender), GrammaticalGender::by_index(index));
        }
        assert_eq!(-1, GrammaticalGender::index_of(None));
    }

    #[test]
    fn by_index_rejects_out_of_range() {
        assert_eq!(Some(GrammaticalGender::Masculine), GrammaticalGender::by_index(2));
        for index in [-1, 3, 5, i32::MIN, i32::MAX] {
            assert_eq!(None, GrammaticalGender::by_index(index), "index {index}");
        }
    }

    #[test]
    fn every_variant_is_real_and_valid() {
        for gender in GrammaticalGender::ALL {
            assert!(!gender.is_fake_value());
            assert!(gender.is_valid_value_for_device());
        }
    }

    #[test]
    fn display_labels() {
        assert_eq!("Neuter", GrammaticalGender::Neuter.short_display_value());
        assert_eq!("Feminine", GrammaticalGender::Feminine.long_display_value());
        assert_eq!("Masculine", GrammaticalGender::Masculine.short_display_value());
        assert_eq!("feminine", GrammaticalGender::Feminine.to_string());
        assert_eq!("neuter", <&str>::from(GrammaticalGender::Neuter));
    }

    #[test]
    fn parse_errors_carry_the_input() {
        let error = "epicene".parse::<GrammaticalGender>().unwrap_err();
        assert_eq!("epicene", error.0);
        assert_eq!("Unknown grammatical gender \"epicene\"", error.to_string());

        let error = GrammaticalGender::try_from(3).unwrap_err();
        assert_eq!(3, error.0);
        assert_eq!(GrammaticalGender::Neuter, GrammaticalGender::try_from(0).unwrap());
        assert_eq!(GrammaticalGender::Masculine, GrammaticalGender::try_from("masculine").unwrap());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_qualifier_values() {
        assert_eq!("\"feminine\"", serde_json::to_string(&GrammaticalGender::Feminine).unwrap());
        assert_eq!(
            GrammaticalGender::Neuter,
            serde_json::from_str::<GrammaticalGender>("\"neuter\"").unwrap()
        );
        assert!(serde_json::from_str::<GrammaticalGender>("\"Neuter\"").is_err());
    }
}
