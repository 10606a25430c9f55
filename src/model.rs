use serde::Deserialize;

/// A single employee, as one record of the remote directory.
///
/// The id is assigned by the remote source and treated as opaque; it is
/// never generated locally. The placeholder API behind the default base
/// url does not actually send `position` or `tasks`, so both usually
/// come back as `None` after deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub tasks: Option<Vec<String>>,
}
