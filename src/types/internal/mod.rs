// Internal types - never serialized to API clients directly
pub mod auth;
