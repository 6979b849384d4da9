//! Value types describing who is logging in where: the relying party's realm, the address Steam
//! returns to, and the SteamID64 extracted from a verified claim.

pub mod realm;
pub mod steam_id;

pub use realm::*;
pub use steam_id::*;
