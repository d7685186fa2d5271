use ra_auth::{Navigation, Route};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Delete,
    Block,
    Unblock,
}

impl MutationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Block => "block",
            Self::Unblock => "unblock",
        }
    }

    pub fn for_blocked(blocked: bool) -> Self {
        if blocked { Self::Block } else { Self::Unblock }
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a bulk action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Empty selection; no remote call was made
    NothingSelected,
    Applied {
        affected: usize,
        navigation: Navigation,
    },
    /// The guard re-check refused the caller; nothing changed locally
    Aborted { redirect: Route },
}

impl MutationOutcome {
    pub fn navigation(&self) -> Navigation {
        match self {
            Self::NothingSelected => Navigation::Stay,
            Self::Applied { navigation, .. } => *navigation,
            Self::Aborted { redirect } => Navigation::Redirect(*redirect),
        }
    }
}
