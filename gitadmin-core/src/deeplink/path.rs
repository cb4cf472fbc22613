/// A destination reachable through a deep link.
pub trait DeeplinkPath {
    /// Path component the destination is matched on, e.g. `/profile/list`.
    fn path(&self) -> &'static str;
}

/// Query parameter carrying the login on the detail route.
pub const LOGIN_USERNAME: &str = "loginUsername";

/// Routes of the GitHub profile feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GithubProfilePath {
    List,
    /// Requires [`LOGIN_USERNAME`].
    Detail,
}

impl GithubProfilePath {
    pub const ALL: [Self; 2] = [Self::List, Self::Detail];

    /// Exact match on the path; no trailing-slash or case folding.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

impl DeeplinkPath for GithubProfilePath {
    fn path(&self) -> &'static str {
        match self {
            Self::List => "/profile/list",
            Self::Detail => "/profile/detail",
        }
    }
}
