//! JSON-RPC 2.0 bridge between the engine and a web debug panel.
//!
//! When the engine runs inside an iframe, the parent page posts requests
//! with `postMessage` and receives responses and notifications the same way.
//! On native builds the bridge is idle.

pub mod web_rpc;
