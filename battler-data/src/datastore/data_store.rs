use anyhow::Result;

use crate::{
    Id,
    MoveData,
};

/// Collection of tables for move data.
///
/// This trait can be implemented for different data sources, such as an external database or disk.
///
/// This collection is used for "raw lookup" of resources by ID.
pub trait DataStore: Send + Sync {
    /// Gets all move IDs, applying the given filter on the underlying data.
    fn all_move_ids(&self, filter: &dyn Fn(&MoveData) -> bool) -> Result<Vec<Id>>;

    /// Translates the given alias to another ID, if the alias mapping exists.
    fn translate_alias(&self, id: &Id) -> Result<Option<Id>>;

    /// Gets a move by ID.
    fn get_move(&self, id: &Id) -> Result<Option<MoveData>>;
}

/// An extension of [`DataStore`] for looking up resources by name.
pub trait DataStoreByName: DataStore {
    /// Gets a move by name.
    fn get_move_by_name(&self, name: &str) -> Result<Option<MoveData>>;
}

impl<T> DataStoreByName for T
where
    T: DataStore + ?Sized,
{
    fn get_move_by_name(&self, name: &str) -> Result<Option<MoveData>> {
        let id = Id::from(name);
        let id = self.translate_alias(&id)?.unwrap_or(id);
        self.get_move(&id)
    }
}
