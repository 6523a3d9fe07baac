use ahash::HashMap;

use crate::Id;

/// Move aliases as written in data files, mapping an alternative name to the real move name.
pub type SerializedAliases = HashMap<String, String>;

/// Move aliases keyed by normalized ID.
///
/// Values always refer to a move ID, never to another alias.
pub type Aliases = HashMap<Id, Id>;

/// Normalizes [`SerializedAliases`] into [`Aliases`].
///
/// Entries that normalize to an empty ID on either side are dropped.
pub fn deserialize_aliases(aliases: SerializedAliases) -> Aliases {
    aliases
        .into_iter()
        .map(|(alias, target)| (Id::from(alias), Id::from(target)))
        .filter(|(alias, target)| !alias.is_empty() && !target.is_empty())
        .collect()
}
