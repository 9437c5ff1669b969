#![deny(rust_2018_idioms)]

pub mod collections;

pub use crate::collections::Seq;
