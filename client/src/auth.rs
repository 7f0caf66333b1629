use std::fmt::Debug;

/// Opaque credential handed out by the account service.
///
/// Never empty. `Debug` hides the value so tokens do not end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Token(..)")
    }
}

/// Whether the user counts as logged in. Presence of a token is all that
/// is checked; it is never validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    Authenticated(Token),
    #[default]
    Anonymous,
}

impl AuthState {
    pub fn from_stored(value: Option<String>) -> Self {
        value
            .and_then(Token::new)
            .map_or(Self::Anonymous, Self::Authenticated)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn token(&self) -> Option<&Token> {
        match self {
            Self::Authenticated(token) => Some(token),
            Self::Anonymous => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_token_means_authenticated() {
        let state = AuthState::from_stored(Some("testToken".to_owned()));
        assert!(state.is_authenticated());
        assert_eq!(state.token().map(Token::as_str), Some("testToken"));
    }

    #[test]
    fn missing_or_empty_token_means_anonymous() {
        assert_eq!(AuthState::from_stored(None), AuthState::Anonymous);
        assert_eq!(AuthState::from_stored(Some(String::new())), AuthState::Anonymous);
    }

    #[test]
    fn debug_output_hides_token() {
        let state = AuthState::from_stored(Some("secret-value".to_owned()));
        assert!(!format!("{state:?}").contains("secret-value"));
    }
}
