//! SharePoint REST plumbing for the splist list browser.
//!
//! The crate covers everything that touches the wire:
//! - [`SpHttp`], the single `GET` capability the browser core depends on,
//!   and [`RestClient`], its `reqwest`-backed implementation;
//! - [`endpoints`], builders for the exact `_api/web` request URLs;
//! - [`envelope`], which hides the two OData response shapes
//!   (`{ d: { results } }` and `{ value }`) behind one conversion;
//! - [`records`], the raw record types those responses deserialize into.
//!
//! Consumers usually:
//! 1. Build a [`RestClient`] from the configured access token.
//! 2. Issue requests against URLs produced by [`endpoints`].
//! 3. Check [`SpResponse::ok`] and feed the JSON body to
//!    [`envelope::collection`] or [`envelope::single`].

mod client;
pub mod endpoints;
pub mod envelope;
mod error;
pub mod records;

pub use client::{RestClient, SpHttp, SpResponse};
pub use error::{RestError, Result};
