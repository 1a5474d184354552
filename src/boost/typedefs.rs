use crate::subgraph::schemas::Token;

/// Amount a receipt is requested for, in the token's smallest unit.
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimAmount {
    /// One whole token, scaled by the boost token's decimals.
    OneToken,
    Fixed(String),
}

impl ClaimAmount {
    pub fn from_config(fixed: Option<&str>) -> Self {
        match fixed {
            Some(amount) if !amount.trim().is_empty() => ClaimAmount::Fixed(amount.trim().to_string()),
            _ => ClaimAmount::OneToken,
        }
    }

    pub fn for_token(&self, token: &Token) -> String {
        match self {
            ClaimAmount::OneToken => format!("1{}", "0".repeat(token.decimals as usize)),
            ClaimAmount::Fixed(amount) => amount.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(decimals: u8) -> Token {
        Token {
            name: "Test".to_string(),
            symbol: "TST".to_string(),
            decimals,
        }
    }

    #[test]
    fn one_token_follows_decimals() {
        assert_eq!(ClaimAmount::OneToken.for_token(&token(18)), "1000000000000000000");
        assert_eq!(ClaimAmount::OneToken.for_token(&token(6)), "1000000");
        assert_eq!(ClaimAmount::OneToken.for_token(&token(0)), "1");
    }

    #[test]
    fn fixed_amount_ignores_decimals() {
        let amount = ClaimAmount::from_config(Some("1000000000000000000"));

        assert_eq!(amount.for_token(&token(6)), "1000000000000000000");
        assert_eq!(ClaimAmount::from_config(Some("  ")), ClaimAmount::OneToken);
        assert_eq!(ClaimAmount::from_config(None), ClaimAmount::OneToken);
    }
}
