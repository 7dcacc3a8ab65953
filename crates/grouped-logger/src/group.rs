//! crates/grouped-logger/src/group.rs
//! Named output groups used to cluster related log lines.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Named tag rendered as `[name]` in front of the message content.
///
/// Groups form an open set: the built-in constants cover common subsystems and
/// callers define their own with [`Group::new`] or, for compile-time constants,
/// [`Group::from_static`]. Two groups are equal exactly when their names are.
///
/// ```
/// use grouped_logger::Group;
///
/// const SYNC: Group = Group::from_static("Sync");
///
/// let moya = Group::new("Moya").unwrap();
/// assert_eq!(moya.name(), "Moya");
/// assert_eq!(SYNC, Group::new("Sync").unwrap());
/// assert_ne!(Group::NETWORK, Group::API);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
pub struct Group {
    name: Cow<'static, str>,
}

/// Error returned when a group name is empty or consists only of whitespace.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("group names must contain at least one non-whitespace character")]
pub struct GroupNameError;

impl Group {
    /// Operating-system and process level events.
    pub const SYSTEM: Self = Self::from_static("System");
    /// Network traffic.
    pub const NETWORK: Self = Self::from_static("Network");
    /// Remote API calls.
    pub const API: Self = Self::from_static("API");
    /// Bluetooth devices.
    pub const BLUETOOTH: Self = Self::from_static("Bluetooth");
    /// Navigation and flow coordination.
    pub const COORDINATOR: Self = Self::from_static("Coordinator");

    /// The predefined groups.
    pub const BUILT_INS: [Self; 5] = [
        Self::SYSTEM,
        Self::NETWORK,
        Self::API,
        Self::BLUETOOTH,
        Self::COORDINATOR,
    ];

    /// Creates a group from a caller-supplied name.
    ///
    /// The name is stored verbatim. Names that are empty or whitespace-only
    /// are rejected so a rendered group segment is never `[]` or `[ ]`.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Result<Self, GroupNameError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GroupNameError);
        }
        Ok(Self { name })
    }

    /// Creates a group from a string literal in const context.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a `const`) if `name` is empty or
    /// consists only of ASCII whitespace.
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        assert!(!is_blank(name), "group names must not be blank");
        Self {
            name: Cow::Borrowed(name),
        }
    }

    /// The display name rendered inside the brackets.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

const fn is_blank(name: &str) -> bool {
    let bytes = name.as_bytes();
    let mut index = 0;
    while index < bytes.len() {
        if !bytes[index].is_ascii_whitespace() {
            return false;
        }
        index += 1;
    }
    true
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<str> for Group {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl FromStr for Group {
    type Err = GroupNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl TryFrom<String> for Group {
    type Error = GroupNameError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl TryFrom<&'static str> for Group {
    type Error = GroupNameError;

    fn try_from(name: &'static str) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl From<Group> for String {
    fn from(group: Group) -> Self {
        group.name.into_owned()
    }
}
