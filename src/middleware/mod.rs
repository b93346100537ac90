/// Session-token signing, verification, and the admin-session extractor
pub mod auth;
