use alloy::sol;

use crate::guard::typedefs::ClaimMessage;

use super::typedefs::{parse_address, parse_bytes, parse_uint};

sol! {
    #[derive(Debug, PartialEq)]
    struct BoostClaim {
        uint256 boostId;
        address recipient;
        uint256 amount;
    }

    #[derive(Debug, PartialEq)]
    function depositTokens(uint256 boostId, uint256 amount);

    #[derive(Debug, PartialEq)]
    function claimTokens(BoostClaim claim, bytes signature);
}

pub fn deposit_tokens_call(boost_id: &str, amount: &str) -> eyre::Result<depositTokensCall> {
    Ok(depositTokensCall {
        boostId: parse_uint(boost_id)?,
        amount: parse_uint(amount)?,
    })
}

/// Builds the claim from the guard's signed message, as the contract verifies it.
pub fn claim_tokens_call(message: &ClaimMessage, sig: &str) -> eyre::Result<claimTokensCall> {
    Ok(claimTokensCall {
        claim: BoostClaim {
            boostId: parse_uint(&message.boost_id)?,
            recipient: parse_address(&message.recipient)?,
            amount: parse_uint(&message.amount)?,
        },
        signature: parse_bytes(sig)?,
    })
}
