//! Infrastructure layer
//!
//! ドメイン層の trait に対する具体的な実装を提供します。

pub mod repository;
