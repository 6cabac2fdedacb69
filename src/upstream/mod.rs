//! Outbound Airtable API subsystem.

pub mod client;

pub use client::AirtableClient;
