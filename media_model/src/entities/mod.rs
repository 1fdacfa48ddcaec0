//! Entity definitions for the media ecosystem.

mod article;
mod author;
mod category;
mod engagement;
mod reader;
mod tag;

pub use article::*;
pub use author::*;
pub use category::*;
pub use engagement::*;
pub use reader::*;
pub use tag::*;

use serde::{Deserialize, Serialize};
use std::hash::Hash;
use uuid::Uuid;

/// Declares a UUID-backed identifier type for one entity kind.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random ID.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an ID from a specific UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Create a nil/empty ID (useful for defaults).
            pub fn nil() -> Self {
                Self(Uuid::nil())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Unique identifier for articles.
    ArticleId
);
entity_id!(
    /// Unique identifier for authors.
    AuthorId
);
entity_id!(
    /// Unique identifier for categories.
    CategoryId
);
entity_id!(
    /// Unique identifier for tags.
    TagId
);
entity_id!(
    /// Unique identifier for readers.
    ReaderId
);

/// Entities stored in a [`Registry`](crate::Registry) expose their own ID.
pub trait Identified {
    type Id: Copy + Eq + Hash;

    fn id(&self) -> Self::Id;
}

/// Entities that can be found by their display name.
pub trait Named: Identified {
    fn name(&self) -> &str;
}
