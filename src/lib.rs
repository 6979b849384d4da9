//! Steam OpenID 2.0 relying party: send users to Steam, verify the callback Steam sends back, and
//! pull the SteamID64 out of the verified claim.
//!
//! The crate models the three steps of a Steam login:
//!
//! 1. [`flows::redirect_url`] (or [`flows::RelyingParty::redirect_url`]) builds the provider URL the
//!    browser is redirected to.
//! 2. [`flows::RelyingParty::verify`] re-submits the callback parameters to Steam in
//!    `check_authentication` mode and interprets the plain-text answer.
//! 3. [`flows::extract_steam_id`] validates the `openid.claimed_id` shape and returns the account
//!    identifier.
//!
//! [`flows::RelyingParty::authenticate`] chains steps 2 and 3 for callback handlers.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
pub mod flows;
pub mod http;
pub mod obs;
pub mod openid;
pub mod params;
pub mod provider;

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap},
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
