/// Identity forwarded by the API gateway.
///
/// Authentication happens upstream; by the time a request reaches this
/// service the gateway has already validated the caller and forwards only the
/// granted roles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrincipalContext {
    roles: Vec<String>,
}

impl PrincipalContext {
    pub fn new(roles: Vec<String>) -> Self {
        Self { roles }
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r == "Admin")
    }
}
