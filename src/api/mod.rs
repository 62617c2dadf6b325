//! API module for HTTP and WebSocket endpoints
//!
//! This module provides the WebSocket room endpoints and the REST
//! notification surface of the session hub.

pub mod http;
pub mod rest;
pub mod websocket;
