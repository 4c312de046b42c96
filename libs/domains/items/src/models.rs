use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An item as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Identifier assigned by the storage backend on creation
    pub id: i32,
    pub name: String,
    /// Serialized as `null` when absent
    pub description: Option<String>,
}

/// Payload for creating an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateItem {
    pub name: String,
    /// Omitted and `null` are equivalent
    #[serde(default)]
    pub description: Option<String>,
}

/// Payload for replacing an item.
///
/// Every field is overwritten, so an omitted description clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdateItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// The client-supplied part of an item, as handed to a repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFields {
    pub name: String,
    pub description: Option<String>,
}

impl ItemFields {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
        }
    }
}

impl From<CreateItem> for ItemFields {
    fn from(input: CreateItem) -> Self {
        Self::new(input.name, input.description)
    }
}

impl From<UpdateItem> for ItemFields {
    fn from(input: UpdateItem) -> Self {
        Self::new(input.name, input.description)
    }
}
