#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub client_id: Option<i64>,
    pub address: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// Fields submitted when opening a project.
///
/// `client_id` is the id picked by the user; an id that no longer exists is
/// stored as "no client".
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub name: String,
    pub client_id: Option<i64>,
    pub address: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}
