//! Centralized default constants for notekeeper.
//!
//! Configuration loaders and handlers reference these instead of defining
//! their own literals.

// =============================================================================
// SERVER
// =============================================================================

/// Default bind host.
pub const HOST: &str = "0.0.0.0";

/// Default listen port, overridable via `PORT`.
pub const PORT: u16 = 3001;

/// Default location of the persisted note collection.
pub const DB_PATH: &str = "db/db.json";

/// Default directory for the browser UI assets.
pub const PUBLIC_DIR: &str = "public";

/// Default CORS origin (the UI served by this same server).
pub const ALLOWED_ORIGIN: &str = "http://localhost:3001";

/// Maximum accepted request body size in bytes.
pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;

// =============================================================================
// CLIENT
// =============================================================================

/// Default API base URL for the client.
pub const API_BASE_URL: &str = "http://localhost:3001";

/// Client request timeout in seconds.
pub const CLIENT_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// MESSAGES
// =============================================================================

/// Returned with 400 when a create request lacks a title or text.
pub const MSG_MISSING_FIELDS: &str = "Note must have a title and text";

/// Returned with 500 when the store cannot be read.
pub const MSG_READ_FAILED: &str = "Failed to read notes";

/// Returned with 500 when a create cannot be persisted.
pub const MSG_SAVE_FAILED: &str = "Failed to save note";

/// Returned with 500 when a delete cannot be persisted.
pub const MSG_DELETE_FAILED: &str = "Failed to delete note";

/// Returned with 200 after a delete, whether or not a note matched.
pub const MSG_DELETED: &str = "Note deleted successfully";
