use crate::services::api::Item;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Menu {
    AllItems,
    LowStock,
    Create,
    /// Jump to the Create tab in editing mode, pre-filled with the item.
    CreatePreFilled(Item),
}
