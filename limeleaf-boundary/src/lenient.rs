//! Tolerant decoding of fields the backend does not always send
//! with the expected JSON type.

use serde::{de::IgnoredAny, Deserialize, Deserializer};

use crate::{Comment, Profile};

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Expected(T),
    Other(IgnoredAny),
}

impl<T: Default> Lenient<T> {
    fn or_default(self) -> T {
        match self {
            Self::Expected(v) => v,
            Self::Other(_) => T::default(),
        }
    }
}

pub fn number_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Lenient::<u64>::deserialize(deserializer)?.or_default())
}

pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Lenient::<String>::deserialize(deserializer)?.or_default())
}

pub fn strings_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Lenient::<Vec<String>>::deserialize(deserializer)?.or_default())
}

pub fn profile_or_default<'de, D>(deserializer: D) -> Result<Profile, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Lenient::<Profile>::deserialize(deserializer)?.or_default())
}

/// A reply is either populated or just its ID.
#[derive(Deserialize)]
#[serde(untagged)]
enum Reply {
    Populated(Comment),
    Id(String),
    Other(IgnoredAny),
}

/// Unpopulated replies are kept as comments with nothing but the ID,
/// so they still count as replies. Anything else is dropped.
pub fn replies_or_ids<'de, D>(deserializer: D) -> Result<Vec<Comment>, D::Error>
where
    D: Deserializer<'de>,
{
    let replies = Lenient::<Vec<Reply>>::deserialize(deserializer)?.or_default();
    Ok(replies
        .into_iter()
        .filter_map(|reply| match reply {
            Reply::Populated(comment) => Some(comment),
            Reply::Id(id) => Some(Comment {
                id,
                ..Comment::default()
            }),
            Reply::Other(_) => None,
        })
        .collect())
}
