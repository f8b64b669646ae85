/// Successful result of a credential strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// A freshly signed session token.
    Token(String),
    /// The stored password, returned as-is.
    Password(String),
}
