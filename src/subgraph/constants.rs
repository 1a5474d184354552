pub const BOOSTS_QUERY: &str = r#"
query Boosts($tag: String!) {
  boosts(where: { tag: $tag }) {
    id
    balance
    strategyURI
    token {
      name
      symbol
      decimals
    }
    start
    end
    claims {
      id
      recipient
      amount
    }
  }
}
"#;

pub const CLAIM_ID_DELIMITER: char = '-';
