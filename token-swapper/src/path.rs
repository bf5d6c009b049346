use alloy::primitives::{hex::FromHexError, Address};

/// What the swap pays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputToken {
    Native,
    Token(Address),
}

impl OutputToken {
    /// `native_symbol` (any case) selects the native asset, anything else must be a token address.
    pub fn parse(spec: &str, native_symbol: &str) -> Result<Self, FromHexError> {
        let spec = spec.trim();
        if spec.eq_ignore_ascii_case(native_symbol) {
            return Ok(OutputToken::Native);
        }
        spec.parse().map(OutputToken::Token)
    }
}

/// Router entry point matching the output side of the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapKind {
    /// `swapExactTokensForETH`
    TokensForNative,
    /// `swapExactTokensForTokens`
    TokensForTokens,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapPath {
    tokens: Vec<Address>,
    kind: SwapKind,
}

impl SwapPath {
    /// Always routes through the wrapped native token, even when a direct pool
    /// exists or when one side already is the wrapper.
    pub fn build(input: Address, output: OutputToken, wrapped_native: Address) -> Self {
        match output {
            OutputToken::Native => Self {
                tokens: vec![input, wrapped_native],
                kind: SwapKind::TokensForNative,
            },
            OutputToken::Token(output) => Self {
                tokens: vec![input, wrapped_native, output],
                kind: SwapKind::TokensForTokens,
            },
        }
    }

    pub fn tokens(&self) -> &[Address] {
        &self.tokens
    }

    pub fn kind(&self) -> SwapKind {
        self.kind
    }

    /// Adjacent `(token_a, token_b)` pairs, each of which needs a pool.
    pub fn hops(&self) -> impl Iterator<Item = (Address, Address)> + '_ {
        self.tokens.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    const INPUT: Address = address!("e9e7cea3dedca5984780bafc599bd69add087d56");
    const WBNB: Address = address!("bb4cdb9cbd36b01bd1cbaebf2de08d9173bc095c");
    const OUTPUT: Address = address!("0e09fabb73bd3ade0a17ecc321fd13a19e81ce82");

    #[test]
    fn native_symbol_is_case_insensitive() {
        for spec in ["BNB", "bnb", "Bnb", " bNb "] {
            assert_eq!(OutputToken::parse(spec, "BNB").unwrap(), OutputToken::Native);
        }
    }

    #[test]
    fn output_address_is_parsed() {
        let output = OutputToken::parse("0x0e09fabb73bd3ade0a17ecc321fd13a19e81ce82", "BNB");
        assert_eq!(output.unwrap(), OutputToken::Token(OUTPUT));
        assert!(OutputToken::parse("CAKE", "BNB").is_err());
    }

    #[test]
    fn native_output_routes_through_wrapper() {
        let path = SwapPath::build(INPUT, OutputToken::Native, WBNB);
        assert_eq!(path.tokens(), &[INPUT, WBNB]);
        assert_eq!(path.kind(), SwapKind::TokensForNative);
        assert_eq!(path.hops().collect::<Vec<_>>(), vec![(INPUT, WBNB)]);
    }

    #[test]
    fn token_output_has_three_hops() {
        let path = SwapPath::build(INPUT, OutputToken::Token(OUTPUT), WBNB);
        assert_eq!(path.tokens(), &[INPUT, WBNB, OUTPUT]);
        assert_eq!(path.kind(), SwapKind::TokensForTokens);
        assert_eq!(
            path.hops().collect::<Vec<_>>(),
            vec![(INPUT, WBNB), (WBNB, OUTPUT)]
        );
    }

    #[test]
    fn wrapper_hop_is_kept_when_input_is_wrapper() {
        let path = SwapPath::build(WBNB, OutputToken::Native, WBNB);
        assert_eq!(path.tokens(), &[WBNB, WBNB]);
    }
}
