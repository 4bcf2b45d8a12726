//! Synchronous API client core for the monday.com boards API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values for four
//! fixed GraphQL operations. The network round trip is delegated to a
//! `Transport` supplied by the host, so the core is deterministic and
//! testable without a server.
//!
//! # Design
//! - `MondayClient` holds only its token, endpoint and transport, all fixed
//!   at construction from an explicit `ClientConfig`.
//! - Each operation is split into `build_*` and `parse_*`; the one-call
//!   methods compose them around a single `Transport::execute`.
//! - Board ids travel as GraphQL variables.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod graphql;
pub mod http;
pub mod types;

pub use client::MondayClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::MondayError;
pub use graphql::{GraphQlError, GraphQlLocation, GraphQlResponse};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use types::{
    select_connected_items, Board, Column, ColumnRef, ColumnValue, ConnectedItem, Item,
    ItemWithColumnValues, BOARD_RELATION,
};
