/// Tag for the custom Deposit event.
pub const DEPOSIT_TAG: u8 = u8::MAX - 5;

/// Tag for the custom List event.
pub const LISTING_TAG: u8 = u8::MAX - 6;

/// Tag for the custom Bid event.
pub const BID_TAG: u8 = u8::MAX - 7;

/// Tag for the custom Finish event.
pub const FINISH_TAG: u8 = u8::MAX - 8;

/// Tag for the custom Withdraw event.
pub const WITHDRAW_TAG: u8 = u8::MAX - 9;
