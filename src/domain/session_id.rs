/// Number of characters in a session token.
pub const SESSION_ID_LEN: usize = 8;
/// Characters a session token is drawn from.
pub const SESSION_ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Error from parsing a session token.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionIdError {
    #[error("session id must be 8 characters, got {0}")]
    Length(usize),
    #[error("session id contains invalid character {0:?}")]
    Character(char),
}

/// An 8-character lowercase-alphanumeric token identifying one setup run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(pub(crate) String);

impl SessionId {
    /// Draw a token uniformly from [`SESSION_ID_ALPHABET`].
    pub fn random<R: rand::Rng>(rng: &mut R) -> Self {
        let token = (0..SESSION_ID_LEN)
            .map(|_| SESSION_ID_ALPHABET[rng.random_range(0..SESSION_ID_ALPHABET.len())] as char)
            .collect();
        SessionId(token)
    }

    /// Validate a raw token, e.g. one read back from a setup log.
    pub fn parse(raw: &str) -> Result<Self, SessionIdError> {
        if let Some(bad) = raw
            .chars()
            .find(|c| !c.is_ascii_lowercase() && !c.is_ascii_digit())
        {
            return Err(SessionIdError::Character(bad));
        }
        if raw.len() != SESSION_ID_LEN {
            return Err(SessionIdError::Length(raw.len()));
        }
        Ok(SessionId(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for SessionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_token_has_fixed_length_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let id = SessionId::random(&mut rng);
            assert_eq!(id.as_str().len(), SESSION_ID_LEN);
            assert!(SessionId::parse(id.as_str()).is_ok(), "bad token {id}");
        }
    }

    #[test]
    fn random_tokens_differ() {
        let mut rng = rand::rng();
        let a = SessionId::random(&mut rng);
        let b = SessionId::random(&mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn parse_accepts_valid_token() {
        assert_eq!(SessionId::parse("ab12cd34").unwrap(), "ab12cd34");
    }

    #[test]
    fn parse_rejects_uppercase() {
        assert_eq!(
            SessionId::parse("AB12cd34"),
            Err(SessionIdError::Character('A'))
        );
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(SessionId::parse("abc"), Err(SessionIdError::Length(3)));
        assert_eq!(SessionId::parse(""), Err(SessionIdError::Length(0)));
    }
}
