//! Domain DTOs for the employee directory API.
//!
//! # Design
//! `Employee` mirrors the upstream wire schema field-for-field. The
//! `{status, data, message}` response wrapper decodes into `Envelope<T>`,
//! which collapses the two nullable wire fields into the `Payload<T>` sum
//! type at deserialization time: a decoded envelope either carries data or
//! carries the server's message, never both and never neither. The
//! mock-server crate defines its own DTOs; integration tests catch schema
//! drift between the two.

use serde::{Deserialize, Serialize};

/// A single employee record returned by the API.
///
/// Field names match the wire format exactly. `profile_image` is an opaque
/// reference (URL or filename); it is never validated or fetched here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: u64,
    pub employee_name: String,
    pub employee_salary: i64,
    pub employee_age: u32,
    pub profile_image: String,
}

/// Decoded payload of a response envelope.
///
/// The wire format carries `data` and `message` as two independent fields
/// where `message` is authoritative whenever `data` is null or absent.
/// Collapsing them into one sum type means callers match on the variant
/// instead of juggling two options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload<T> {
    /// The `data` field was present and non-null.
    Data(T),
    /// The `data` field was null or absent; carries the wire `message`.
    Error(String),
}

/// A decoded response envelope.
///
/// List endpoints decode as `Envelope<Vec<Employee>>`, the detail endpoint
/// as `Envelope<Employee>`. The `status` string is carried through as the
/// server sent it but is not interpreted; presence of data decides the
/// outcome.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawEnvelope<T>")]
pub struct Envelope<T> {
    pub status: String,
    pub payload: Payload<T>,
}

/// The envelope as it appears on the wire. A missing `data` key decodes
/// the same as an explicit null.
#[derive(Deserialize)]
struct RawEnvelope<T> {
    status: String,
    #[serde(default = "Option::default")]
    data: Option<T>,
    message: String,
}

impl<T> From<RawEnvelope<T>> for Envelope<T> {
    fn from(raw: RawEnvelope<T>) -> Self {
        let payload = match raw.data {
            Some(data) => Payload::Data(data),
            None => Payload::Error(raw.message),
        };
        Envelope {
            status: raw.status,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_decodes_wire_field_names() {
        let json = r#"{"id":1,"employee_name":"Tiger Nixon","employee_salary":320800,"employee_age":61,"profile_image":""}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, 1);
        assert_eq!(employee.employee_name, "Tiger Nixon");
        assert_eq!(employee.employee_salary, 320_800);
        assert_eq!(employee.employee_age, 61);
        assert_eq!(employee.profile_image, "");
    }

    #[test]
    fn envelope_with_data_decodes_to_data_variant() {
        let json = r#"{"status":"success","data":[{"id":1,"employee_name":"A","employee_salary":100,"employee_age":20,"profile_image":""}],"message":""}"#;
        let envelope: Envelope<Vec<Employee>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.status, "success");
        match envelope.payload {
            Payload::Data(employees) => {
                assert_eq!(employees.len(), 1);
                assert_eq!(employees[0].id, 1);
            }
            Payload::Error(message) => panic!("expected data, got error: {message}"),
        }
    }

    #[test]
    fn envelope_with_null_data_decodes_to_error_variant() {
        let json = r#"{"status":"error","data":null,"message":"not found"}"#;
        let envelope: Envelope<Employee> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.payload, Payload::Error("not found".to_string()));
    }

    #[test]
    fn envelope_with_missing_data_key_decodes_to_error_variant() {
        let json = r#"{"status":"error","message":"gone"}"#;
        let envelope: Envelope<Employee> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.payload, Payload::Error("gone".to_string()));
    }

    #[test]
    fn envelope_missing_message_is_a_decode_error() {
        let json = r#"{"status":"success","data":null}"#;
        let result: Result<Envelope<Employee>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn envelope_preserves_list_order() {
        let json = r#"{"status":"success","data":[
            {"id":3,"employee_name":"C","employee_salary":3,"employee_age":30,"profile_image":""},
            {"id":1,"employee_name":"A","employee_salary":1,"employee_age":10,"profile_image":""},
            {"id":2,"employee_name":"B","employee_salary":2,"employee_age":20,"profile_image":""}
        ],"message":""}"#;
        let envelope: Envelope<Vec<Employee>> = serde_json::from_str(json).unwrap();
        let employees = match envelope.payload {
            Payload::Data(employees) => employees,
            Payload::Error(message) => panic!("expected data, got error: {message}"),
        };
        let ids: Vec<u64> = employees.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
