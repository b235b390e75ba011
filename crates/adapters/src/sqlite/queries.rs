use rusqlite::{params, Connection, Result};

pub const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS collections (
    name TEXT PRIMARY KEY,
    entries_json TEXT NOT NULL
);";

pub fn upsert_list(conn: &Connection, name: &str, entries_json: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO collections (name, entries_json)
         VALUES (?1, ?2)
         ON CONFLICT(name) DO UPDATE SET
            entries_json = excluded.entries_json",
        params![name, entries_json],
    )?;
    Ok(())
}

pub fn find_list(conn: &Connection, name: &str) -> Result<Option<String>> {
    let mut stmt = conn.prepare(
        "SELECT entries_json
         FROM collections
         WHERE name = ?1",
    )?;
    let mut rows = stmt.query(params![name])?;
    if let Some(row) = rows.next()? {
        let entries_json: String = row.get(0)?;
        return Ok(Some(entries_json));
    }
    Ok(None)
}

pub fn delete_list(conn: &Connection, name: &str) -> Result<()> {
    conn.execute("DELETE FROM collections WHERE name = ?1", params![name])?;
    Ok(())
}
