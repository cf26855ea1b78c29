//! A custodial English auction for CIS-1 NFTs, settled in a CIS-1 fungible
//! token. It takes assets into custody through the CIS-1 receive hook,
//! exposes functions for listing, bidding, finishing and withdrawing.
#![cfg_attr(not(feature = "std"), no_std)]

mod contract;
mod events;
mod external;
mod nft;
mod state;
mod token;
