use serde::Serialize;

pub const KEEP_ALIVE_TABLE: &str = "neighbor";

/// A read against one table: which columns, and at most how many rows.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SelectQuery {
    #[serde(skip)]
    pub table: String,
    #[serde(rename = "select")]
    pub columns: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl SelectQuery {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: "*".to_string(),
            limit: None,
        }
    }

    pub fn columns(mut self, columns: impl Into<String>) -> Self {
        self.columns = columns.into();
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// First row of the keep-alive table, all columns.
    pub fn keep_alive() -> Self {
        Self::new(KEEP_ALIVE_TABLE).columns("*").limit(1)
    }
}
