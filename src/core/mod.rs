//! Core constants shared by the directory clients, chain queries and CLI

pub mod constants;
