//! Owner identities and the synthetic actor used for automated placement.

use std::sync::LazyLock;

use md5::{Digest, Md5};
use uuid::{Builder, Uuid};

/// Display name reported for carts that were never tagged.
pub const UNKNOWN_OWNER_NAME: &str = "[Unknown]";

/// Display name of the synthetic actor.
pub const SYNTHETIC_ACTOR_NAME: &str = "[Railcraft]";

static SYNTHETIC_ACTOR: LazyLock<OwnerIdentity> =
    LazyLock::new(|| OwnerIdentity::new(SYNTHETIC_ACTOR_NAME, name_uuid(SYNTHETIC_ACTOR_NAME)));

/// Version 3 UUID of the raw MD5 of `name`, with no namespace prefix.
/// Matches the ids the host derives for offline profiles.
pub fn name_uuid(name: &str) -> Uuid {
    let digest: [u8; 16] = Md5::digest(name.as_bytes()).into();
    Builder::from_md5_bytes(digest).into_uuid()
}

/// The identity used as the acting party when no real actor is present,
/// e.g. a dispenser placing a cart. Built once, never changes.
pub fn synthetic_actor() -> &'static OwnerIdentity {
    &SYNTHETIC_ACTOR
}

/// Who owns a cart: a display name and an optional stable id.
///
/// Either field may be absent on an identity being written; absent fields
/// leave the stored value alone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct OwnerIdentity {
    pub name: Option<String>,
    pub id: Option<Uuid>,
}

impl OwnerIdentity {
    /// Identity with both fields present.
    pub fn new(name: impl Into<String>, id: Uuid) -> Self {
        Self {
            name: Some(name.into()),
            id: Some(id),
        }
    }

    /// Identity with a name and no stable id.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            id: None,
        }
    }

    /// The identity reported for untagged carts.
    pub fn unknown() -> Self {
        Self::named(UNKNOWN_OWNER_NAME)
    }

    /// Name to show to users, falling back to [`UNKNOWN_OWNER_NAME`].
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_OWNER_NAME)
    }
}

impl std::fmt::Display for OwnerIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "{} ({id})", self.display_name()),
            None => f.write_str(self.display_name()),
        }
    }
}
