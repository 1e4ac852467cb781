pub const ERR_INSUFFICIENT_CONTRIBUTION: &str = "You need to spend more EGLD!";
pub const ERR_NOT_OWNER: &str = "FundMe__NotOwner";
pub const ERR_ORACLE_DATA: &str = "Oracle reported a non-positive price";
pub const ERR_ARITHMETIC_OVERFLOW: &str = "Price scale overflow";
pub const ERR_INVALID_ADDRESS: &str = "Invalid price feed address";
pub const ERR_FUNDER_INDEX: &str = "Funder index out of range";
