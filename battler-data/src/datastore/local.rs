use std::{
    env,
    fs::File,
    io::Read,
    path::Path,
};

use ahash::HashMap;
use anyhow::{
    Context,
    Error,
    Result,
};

use crate::{
    Aliases,
    DataStore,
    Id,
    MoveData,
    SerializedAliases,
    deserialize_aliases,
};

/// An implementation of [`DataStore`] that holds all data in memory.
///
/// Data can be read from disk, from a JSON string, or inserted directly.
#[derive(Debug, Default)]
pub struct LocalDataStore {
    pub aliases: Aliases,
    pub moves: HashMap<Id, MoveData>,
}

impl LocalDataStore {
    /// Aliases file name.
    pub const ALIASES_FILE: &str = "aliases.json";
    /// Moves directory name.
    pub const MOVES_DIR: &str = "moves";

    /// Creates a new instance of [`LocalDataStore`] that reads from the given root directory.
    ///
    /// Fails if the path does not exist, does not point to a directory, or cannot be used to fill
    /// cached data. The aliases file is optional.
    pub fn new(root: String) -> Result<Self> {
        let root = Path::new(&root);
        if !root.is_dir() {
            return Err(Error::msg(format!(
                "Root directory for LocalDataStore ({}) does not exist",
                root.display(),
            )));
        }

        let mut store = Self::default();

        let aliases_path = root.join(Self::ALIASES_FILE);
        if aliases_path.is_file() {
            let aliases: SerializedAliases = serde_json::from_reader(
                File::open(&aliases_path).context("failed to read aliases")?,
            )
            .context("failed to parse aliases")?;
            store.aliases = deserialize_aliases(aliases);
        }

        let moves_dir = root.join(Self::MOVES_DIR);
        let tables = moves_dir
            .read_dir()
            .context(format!("failed to read {} directory", Self::MOVES_DIR))?
            .filter_map(|entry| Some(entry.ok()?.path()))
            .filter(|path| path.is_file())
            .map(|path| {
                let path_name = path.to_string_lossy().to_string();
                File::open(&path)
                    .context(format!("{path_name} could not be opened"))
                    .and_then(|file| {
                        Self::read_move_table(file)
                            .context(format!("failed to read move data from {path_name}"))
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        for table in tables {
            store.moves.extend(table);
        }

        Ok(store)
    }

    /// Creates a new instance of [`LocalDataStore`] that reads from the root directory at the given
    /// environment variable.
    pub fn new_from_env(env_var: &str) -> Result<Self> {
        Self::new(env::var(env_var).context(format!("{env_var} not defined"))?)
    }

    /// Creates a new instance of [`LocalDataStore`] from a JSON object of moves keyed by name.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self {
            moves: Self::read_move_table(json.as_bytes()).context("failed to parse move data")?,
            ..Default::default()
        })
    }

    /// Creates a new instance of [`LocalDataStore`] from the given moves.
    pub fn from_moves<I>(moves: I) -> Self
    where
        I: IntoIterator<Item = MoveData>,
    {
        let mut store = Self::default();
        for move_data in moves {
            store.insert_move(move_data);
        }
        store
    }

    /// Inserts a move, keyed by its name.
    pub fn insert_move(&mut self, move_data: MoveData) {
        self.moves.insert(Id::from(move_data.name.as_str()), move_data);
    }

    /// Inserts an alias from one move name to another.
    pub fn insert_alias(&mut self, alias: &str, target: &str) {
        self.aliases.insert(Id::from(alias), Id::from(target));
    }

    fn read_move_table<R>(reader: R) -> Result<HashMap<Id, MoveData>>
    where
        R: Read,
    {
        let table: HashMap<String, MoveData> = serde_json::from_reader(reader)?;
        Ok(table
            .into_iter()
            .map(|(key, value)| (Id::from(key), value))
            .collect())
    }
}

impl DataStore for LocalDataStore {
    fn all_move_ids(&self, filter: &dyn Fn(&MoveData) -> bool) -> Result<Vec<Id>> {
        let mut move_ids = Vec::new();
        for (id, move_data) in self.moves.iter() {
            if filter(move_data) {
                move_ids.push(id.clone());
            }
        }
        Ok(move_ids)
    }

    fn translate_alias(&self, id: &Id) -> Result<Option<Id>> {
        Ok(self.aliases.get(id).cloned())
    }

    fn get_move(&self, id: &Id) -> Result<Option<MoveData>> {
        Ok(self.moves.get(id).cloned())
    }
}
