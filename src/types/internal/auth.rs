use serde::{Deserialize, Serialize};

/// The three roles the system knows. Anything else in a token or a database
/// row fails to parse and is treated as "no access".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Guest,
    Employee,
    Admin,
}

impl Role {
    /// Parse a stored role string. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "guest" => Some(Role::Guest),
            "employee" => Some(Role::Employee),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Employee => "employee",
            Role::Admin => "admin",
        }
    }
}

/// Authenticated caller, built once per request from a validated token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub id: i32,
    pub role: Role,
}

/// JWT claims embedded in access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: i32,
    /// Role at token issue time
    pub role: Role,
    /// Expiration (unix timestamp)
    pub exp: i64,
    /// Issued at (unix timestamp)
    pub iat: i64,
}

impl From<&Claims> for Identity {
    fn from(claims: &Claims) -> Self {
        Identity {
            id: claims.sub,
            role: claims.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_roles() {
        assert_eq!(Role::parse("guest"), Some(Role::Guest));
        assert_eq!(Role::parse("employee"), Some(Role::Employee));
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
    }

    #[test]
    fn test_parse_unknown_role_yields_none() {
        assert_eq!(Role::parse("superadmin"), None);
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_role_round_trips_through_as_str() {
        for role in [Role::Guest, Role::Employee, Role::Admin] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_claims_serialize_role_lowercase() {
        let claims = Claims {
            sub: 7,
            role: Role::Employee,
            exp: 100,
            iat: 0,
        };
        let json = serde_json::to_string(&claims).unwrap();
        assert!(json.contains("\"role\":\"employee\""));
    }

    #[test]
    fn test_claims_with_unknown_role_fail_to_deserialize() {
        let json = r#"{"sub":1,"role":"root","exp":100,"iat":0}"#;
        let result: Result<Claims, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
