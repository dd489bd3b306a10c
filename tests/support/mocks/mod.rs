// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod repos;
pub mod security;
pub mod time;

pub use repos::{InMemoryPostRepo, InMemoryUserRepo};
pub use security::{DummyPasswordHasher, DummyTokenManager, actor, bearer};
pub use time::{DummyClock, fixed_now};
