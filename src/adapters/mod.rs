//! External integrations
//!
//! Adapters wrap everything outside the process boundary — currently the
//! CMS HTTP API — behind traits the core consumes.

pub mod cms;
