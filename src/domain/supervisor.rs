// Supervisor domain model
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by the remote directory; it arrives as either a JSON
/// number or a JSON string and is rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SupervisorId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for SupervisorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupervisorId::Number(n) => write!(f, "{}", n),
            SupervisorId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supervisor {
    pub id: SupervisorId,
    pub first_name: String,
    pub last_name: String,
    pub jurisdiction: String,
    pub phone: String,
    pub identification_number: String,
}

impl Supervisor {
    /// Placeholder address built as `firstName + lastName + id @ domain`.
    /// The directory API carries no contact email.
    pub fn notification_email(&self, mail_domain: &str) -> String {
        format!(
            "{}{}{}@{}",
            self.first_name, self.last_name, self.id, mail_domain
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Supervisor {
        Supervisor {
            id: SupervisorId::Text("42".to_string()),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            jurisdiction: "North".to_string(),
            phone: "555-0100".to_string(),
            identification_number: "ID-9".to_string(),
        }
    }

    #[test]
    fn test_notification_email() {
        assert_eq!(jane().notification_email("gmail.com"), "JaneDoe42@gmail.com");
    }

    #[test]
    fn test_parse_camel_case_with_numeric_id() {
        let json = r#"{
            "id": 7,
            "firstName": "Ana",
            "lastName": "Lopez",
            "jurisdiction": "South",
            "phone": "555-0199",
            "identificationNumber": "ID-1"
        }"#;
        let supervisor: Supervisor = serde_json::from_str(json).unwrap();

        assert_eq!(supervisor.id, SupervisorId::Number(7.into()));
        assert_eq!(supervisor.identification_number, "ID-1");
        assert_eq!(supervisor.notification_email("gmail.com"), "AnaLopez7@gmail.com");
    }

    #[test]
    fn test_any_json_number_id_decodes() {
        for (raw, shown) in [
            ("1.5", "1.5"),
            ("42.0", "42.0"),
            ("18446744073709551615", "18446744073709551615"),
            ("-3", "-3"),
        ] {
            let json = format!(
                r#"[{{"id": {raw}, "firstName": "A", "lastName": "B", "jurisdiction": "", "phone": "", "identificationNumber": "X"}}]"#
            );
            let supervisors: Vec<Supervisor> = serde_json::from_str(&json).unwrap();

            assert_eq!(supervisors.len(), 1);
            assert_eq!(supervisors[0].id.to_string(), shown);
            assert_eq!(supervisors[0].notification_email("gmail.com"), format!("AB{shown}@gmail.com"));
        }
    }

    #[test]
    fn test_string_id_is_rendered_verbatim() {
        let supervisor: Supervisor = serde_json::from_value(serde_json::json!({
            "id": "abc-001",
            "firstName": "A",
            "lastName": "B",
            "jurisdiction": "",
            "phone": "",
            "identificationNumber": "X"
        }))
        .unwrap();

        assert_eq!(supervisor.id.to_string(), "abc-001");
    }
}
