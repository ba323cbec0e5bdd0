//! Builds the parameterized SELECTs served by the API.

use crate::config::EntityConfig;
use serde_json::Value;

/// Days covered by the recent-loans report, counted back from the current date.
pub const RECENT_LOANS_WINDOW_DAYS: u32 = 30;

#[derive(Clone, Debug, PartialEq)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryBuf {
    fn new(sql: String) -> Self {
        QueryBuf {
            sql,
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: Value) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

/// SELECT every row of the entity's table.
pub fn select_all(entity: &EntityConfig) -> QueryBuf {
    QueryBuf::new(format!("SELECT * FROM {}", entity.name))
}

/// SELECT by the entity's id column; the id is bound as `$1`.
pub fn select_by_id(entity: &EntityConfig, id: Value) -> QueryBuf {
    let mut q = QueryBuf::new(String::new());
    let n = q.push_param(id);
    q.sql = format!("SELECT * FROM {} WHERE {} = ${}", entity.name, entity.id_column, n);
    q
}

/// Books joined with their loans and borrowing members, limited to loans issued
/// within the last `RECENT_LOANS_WINDOW_DAYS` days (boundary day included).
pub fn recent_loans() -> QueryBuf {
    QueryBuf::new(format!(
        r#"SELECT b.Title AS "title", m.Name AS "memberName", l.IssueDate::date AS "issueDate"
FROM Books b
JOIN Loans l ON b.BookID = l.BookID
JOIN Members m ON l.MemberID = m.MemberID
WHERE l.IssueDate >= CURRENT_DATE - {}"#,
        RECENT_LOANS_WINDOW_DAYS
    ))
}
