//! Walks through a Steam login: build the redirect, then handle the callback Steam sends back.
//!
//! Pass the callback query string as the first argument to verify it against Steam, e.g.
//! `cargo run --example steam_login -- 'openid.ns=...&openid.mode=id_res&...'`.

// crates.io
use color_eyre::Result;
use url::Url;
// self
use steam_openid::{
	auth::{Realm, ReturnAddress},
	flows::{RelyingParty, extract_steam_id},
	params::CallbackParameters,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let relying_party = RelyingParty::new()?;
	let site = Url::parse("http://localhost:8080")?;
	let realm = Realm::from_url(&site)?;
	let return_to = ReturnAddress::from(site.join("/auth/callback")?);
	let redirect = relying_party.redirect_url(&realm, &return_to);

	println!("Send your user to {redirect}.");

	let Some(query) = std::env::args().nth(1) else {
		println!("Pass the callback query string to verify it with Steam.");

		return Ok(());
	};
	let params = CallbackParameters::from_query(&query);

	if params.is_empty() {
		println!("The callback query string carries no parameters.");

		return Ok(());
	}

	// The claimed identifier can be inspected without a network call, but it is only trustworthy
	// once Steam has confirmed the assertion.
	match extract_steam_id(&params) {
		Ok(claimed) => println!("Callback claims SteamID64 {claimed}; verifying with Steam."),
		Err(e) => println!("Callback carries no usable claimed identifier: {e}."),
	}

	match relying_party.authenticate(&params).await {
		Ok(steam_id) => println!("Logged in user with SteamID64 {steam_id}."),
		Err(e) if e.is_login_failure() => println!("Login failed, please try again: {e}."),
		Err(e) => eprintln!("Steam login is misconfigured or unavailable: {e}."),
	}

	Ok(())
}
