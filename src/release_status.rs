use crate::{
    errors::UnknownStatusKey,
    list_box::{ListBox, ListBoxOption},
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// Release status of an uploaded application version.
///
/// The status decides who can access a version on the backend. `Development`
/// versions are visible to developers, `Review` versions to reviewers and
/// `Release` versions to end users. Versions normally enter as `Development`
/// and are promoted by hand on the backend; choosing another status at upload
/// time skips part of that manual process.
///
/// The key of each status is persisted in job configurations and must never
/// change. The label is display text only.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::IntoStaticStr,
    strum::EnumCount,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ReleaseStatus {
    #[default]
    Development,
    Review,
    Release,
}

impl ReleaseStatus {
    /// Display order: least trusted first, production last.
    pub const ALL: [ReleaseStatus; 3] = [
        ReleaseStatus::Development,
        ReleaseStatus::Review,
        ReleaseStatus::Release,
    ];

    #[inline]
    pub fn list_in_order() -> [ReleaseStatus; 3] {
        Self::ALL
    }

    pub fn resolve(key: &str) -> Result<Self, UnknownStatusKey> {
        Self::ALL
            .into_iter()
            .find(|status| status.key() == key)
            .ok_or_else(|| UnknownStatusKey::new(key))
    }

    #[inline]
    pub fn key(self) -> &'static str {
        self.into()
    }

    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            ReleaseStatus::Development => "Development",
            ReleaseStatus::Review => "Review",
            ReleaseStatus::Release => "Release",
        }
    }

    /// `(label, key)`: the visible text and the submitted value of a select option.
    #[inline]
    pub fn to_display_pair(self) -> (&'static str, &'static str) {
        (self.label(), self.key())
    }

    pub fn as_option(self) -> ListBoxOption {
        let (name, value) = self.to_display_pair();
        ListBoxOption::new(name, value)
    }

    /// Puts every status at the head of `list`, ahead of entries already in it.
    pub fn fill_list_box(list: &mut ListBox) {
        for (index, status) in Self::ALL.into_iter().enumerate() {
            list.insert(index, status.as_option());
        }
    }
}

impl fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReleaseStatus {
    type Err = UnknownStatusKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl Serialize for ReleaseStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for ReleaseStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        Self::resolve(&key).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn test_list_in_order() {
        assert_eq!(ReleaseStatus::COUNT, 3);
        assert_eq!(
            ReleaseStatus::list_in_order(),
            [
                ReleaseStatus::Development,
                ReleaseStatus::Review,
                ReleaseStatus::Release
            ]
        );
        assert_eq!(ReleaseStatus::list_in_order(), ReleaseStatus::list_in_order());
    }

    #[test]
    fn test_resolve_round_trip() {
        for status in ReleaseStatus::list_in_order() {
            assert_eq!(ReleaseStatus::resolve(status.key()), Ok(status));
        }
    }

    #[test]
    fn test_keys_are_stable() {
        assert_eq!(ReleaseStatus::Development.key(), "DEVELOPMENT");
        assert_eq!(ReleaseStatus::Review.key(), "REVIEW");
        assert_eq!(ReleaseStatus::Release.key(), "RELEASE");
    }

    #[test]
    fn test_resolve_unknown() {
        let err = ReleaseStatus::resolve("INVALID").unwrap_err();
        assert_eq!(err, UnknownStatusKey::new("INVALID"));

        // keys are case sensitive, labels are not keys
        assert!(ReleaseStatus::resolve("release").is_err());
        assert!(ReleaseStatus::resolve("Release").is_err());
        assert!(ReleaseStatus::resolve("").is_err());
        assert!(ReleaseStatus::resolve(" RELEASE").is_err());
    }

    #[test]
    fn test_display_pair() {
        assert_eq!(
            ReleaseStatus::Release.to_display_pair(),
            ("Release", "RELEASE")
        );
        assert_eq!(
            ReleaseStatus::Development.to_display_pair(),
            ("Development", "DEVELOPMENT")
        );
        assert_eq!(ReleaseStatus::Review.to_string(), "Review");
    }

    #[test]
    fn test_default_is_development() {
        assert_eq!(ReleaseStatus::default(), ReleaseStatus::Development);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("REVIEW".parse::<ReleaseStatus>(), Ok(ReleaseStatus::Review));
        assert!("review".parse::<ReleaseStatus>().is_err());
    }

    #[test]
    fn test_serde_uses_key() {
        let json = serde_json::to_string(&ReleaseStatus::Review).unwrap();
        assert_eq!(json, r#""REVIEW""#);

        let status: ReleaseStatus = serde_json::from_str(r#""RELEASE""#).unwrap();
        assert_eq!(status, ReleaseStatus::Release);

        let err = serde_json::from_str::<ReleaseStatus>(r#""Release""#).unwrap_err();
        assert!(err.to_string().contains("Unknown release status key"));
    }

    #[test]
    fn test_fill_list_box_puts_statuses_first() {
        let mut list = ListBox::default();
        list.add(ListBoxOption::new("Custom", "CUSTOM"));

        ReleaseStatus::fill_list_box(&mut list);

        let values = list.iter().map(|o| o.value.as_str()).collect::<Vec<_>>();
        assert_eq!(values, ["DEVELOPMENT", "REVIEW", "RELEASE", "CUSTOM"]);
    }
}
