use secrecy::Secret;

/// Output of a [`CredentialHasher`](crate::CredentialHasher).
///
/// The inner string is self-describing (algorithm, parameters and salt are
/// embedded), so it can be verified without any other stored state.
#[derive(Debug, Clone)]
pub struct HashedPassword(Secret<String>);

impl HashedPassword {
    pub fn new(hash: Secret<String>) -> Self {
        Self(hash)
    }
}

impl AsRef<Secret<String>> for HashedPassword {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl From<String> for HashedPassword {
    fn from(hash: String) -> Self {
        Self(Secret::from(hash))
    }
}
