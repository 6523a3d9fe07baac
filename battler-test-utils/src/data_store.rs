use std::sync::LazyLock;

use ahash::{
    HashMap,
    HashSet,
};
use anyhow::{
    Error,
    Result,
};
use battler_data::{
    DataStore,
    Id,
    LocalDataStore,
    MoveData,
    SerializedAliases,
    deserialize_aliases,
};

const TEST_ALIASES: &str = include_str!("../test_data/aliases.json");
const TEST_MOVES: &str = include_str!("../test_data/moves/moves.json");

static LOCAL_DATA_STORE: LazyLock<LocalDataStore> = LazyLock::new(|| {
    let mut data = LocalDataStore::from_json_str(TEST_MOVES).unwrap();
    data.aliases =
        deserialize_aliases(serde_json::from_str::<SerializedAliases>(TEST_ALIASES).unwrap());
    data
});

/// A shared [`LocalDataStore`] holding every move used by tests.
pub fn static_local_data_store() -> &'static LocalDataStore {
    &LOCAL_DATA_STORE
}

/// The root directory of the test data, for tests that read data from disk.
pub fn test_data_dir() -> String {
    format!("{}/test_data", env!("CARGO_MANIFEST_DIR"))
}

/// Wrapper around the static [`LocalDataStore`] for testing.
///
/// Allows fake values to be inserted exclusively for the test, and lookups of specific moves to
/// fail.
pub struct TestDataStore {
    local: &'static LocalDataStore,
    fake_moves: HashMap<Id, MoveData>,
    broken_moves: HashSet<Id>,
}

impl TestDataStore {
    pub fn new() -> Self {
        Self {
            local: static_local_data_store(),
            fake_moves: HashMap::default(),
            broken_moves: HashSet::default(),
        }
    }

    pub fn add_fake_move(&mut self, move_data: MoveData) {
        self.fake_moves.insert(Id::from(move_data.name.as_str()), move_data);
    }

    /// Makes every lookup of the move fail.
    pub fn add_broken_move(&mut self, name: &str) {
        self.broken_moves.insert(Id::from(name));
    }
}

impl DataStore for TestDataStore {
    fn all_move_ids(&self, filter: &dyn Fn(&MoveData) -> bool) -> Result<Vec<Id>> {
        let mut ids = self.local.all_move_ids(filter)?;
        ids.extend(
            self.fake_moves
                .iter()
                .filter(|(_, move_data)| filter(move_data))
                .map(|(id, _)| id.clone()),
        );
        Ok(ids)
    }

    fn translate_alias(&self, id: &Id) -> Result<Option<Id>> {
        self.local.translate_alias(id)
    }

    fn get_move(&self, id: &Id) -> Result<Option<MoveData>> {
        if self.broken_moves.contains(id) {
            return Err(Error::msg(format!("move {id} is broken for this test")));
        }
        if let Some(move_data) = self.fake_moves.get(id) {
            return Ok(Some(move_data.clone()));
        }
        self.local.get_move(id)
    }
}
