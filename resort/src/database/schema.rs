//! Database schema definitions and SQL constants.

/// Current schema version for the database.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the reservations table.
///
/// Dates are ISO `YYYY-MM-DD` strings; `manual_status` is NULL until staff
/// check the guest out or cancel.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id TEXT PRIMARY KEY NOT NULL,
        guest_name TEXT NOT NULL,
        address TEXT NOT NULL,
        contact_number TEXT NOT NULL,
        room_type TEXT NOT NULL,
        check_in TEXT NOT NULL,
        check_out TEXT NOT NULL,
        total_cost INTEGER NOT NULL,
        manual_status TEXT
    )";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert one reservation row.
pub const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations
    (id, guest_name, address, contact_number, room_type, check_in, check_out, total_cost, manual_status)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
";

/// SQL statement to remove every reservation row.
pub const DELETE_ALL_RESERVATIONS: &str = "DELETE FROM reservations";

/// SQL statement to read every reservation row.
pub const LIST_RESERVATIONS: &str = r"
    SELECT id, guest_name, address, contact_number, room_type, check_in, check_out, total_cost, manual_status
    FROM reservations
    ORDER BY id
";
