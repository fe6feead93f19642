use crate::errors::EventError;
use serde_json::Value;

/// Outcome of looking up `arguments.name` in an invocation event.
///
/// The lookup is two levels deep and each level can be missing on its own,
/// so the three cases are kept apart and only collapsed into display text
/// by the handler's policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedName {
    /// No `arguments` key, or `arguments` is null or not an object.
    ArgumentsAbsent,
    /// `arguments` is an object without `name`, or with `name: null`.
    NameAbsent,
    /// `arguments.name` was given. The empty string counts as given.
    Provided(String),
}

impl ResolvedName {
    /// Same information as the enum, as nested options: the outer level is
    /// `arguments`, the inner one `name`.
    pub fn into_option(self) -> Option<Option<String>> {
        match self {
            ResolvedName::ArgumentsAbsent => None,
            ResolvedName::NameAbsent => Some(None),
            ResolvedName::Provided(name) => Some(Some(name)),
        }
    }
}

pub fn resolve_name(event: &Value) -> Result<ResolvedName, EventError> {
    let Value::Object(event) = event else {
        return Err(EventError::NotAnObject {
            found: kind(event),
        });
    };

    let arguments = match event.get("arguments") {
        Some(Value::Object(arguments)) => arguments,
        // scalars and arrays carry no `name`, greeted like a missing block
        _ => return Ok(ResolvedName::ArgumentsAbsent),
    };

    Ok(match arguments.get("name") {
        None | Some(Value::Null) => ResolvedName::NameAbsent,
        Some(Value::String(name)) => ResolvedName::Provided(name.clone()),
        // non-string names are greeted by their compact JSON text
        Some(other) => ResolvedName::Provided(other.to_string()),
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_arguments_absent() {
        assert_eq!(resolve_name(&json!({})), Ok(ResolvedName::ArgumentsAbsent));
        assert_eq!(
            resolve_name(&json!({"arguments": null})),
            Ok(ResolvedName::ArgumentsAbsent)
        );
    }

    #[test]
    fn test_unrelated_keys_are_ignored() {
        let event = json!({"name": "Top", "info": {"fieldName": "sayHello"}});
        assert_eq!(resolve_name(&event), Ok(ResolvedName::ArgumentsAbsent));
    }

    #[test]
    fn test_name_absent() {
        assert_eq!(
            resolve_name(&json!({"arguments": {}})),
            Ok(ResolvedName::NameAbsent)
        );
        assert_eq!(
            resolve_name(&json!({"arguments": {"other": "x"}})),
            Ok(ResolvedName::NameAbsent)
        );
        assert_eq!(
            resolve_name(&json!({"arguments": {"name": null}})),
            Ok(ResolvedName::NameAbsent)
        );
    }

    #[test]
    fn test_name_provided() {
        assert_eq!(
            resolve_name(&json!({"arguments": {"name": "Bob"}})),
            Ok(ResolvedName::Provided("Bob".to_string()))
        );
        assert_eq!(
            resolve_name(&json!({"arguments": {"name": ""}})),
            Ok(ResolvedName::Provided(String::new()))
        );
    }

    // JSON spelling on purpose (`true`, not `True`)
    #[test]
    fn test_non_string_name_uses_json_text() {
        assert_eq!(
            resolve_name(&json!({"arguments": {"name": 42}})),
            Ok(ResolvedName::Provided("42".to_string()))
        );
        assert_eq!(
            resolve_name(&json!({"arguments": {"name": true}})),
            Ok(ResolvedName::Provided("true".to_string()))
        );
    }

    #[test]
    fn test_event_must_be_object() {
        assert_eq!(
            resolve_name(&json!(["arguments"])),
            Err(EventError::NotAnObject { found: "array" })
        );
        assert_eq!(
            resolve_name(&Value::Null),
            Err(EventError::NotAnObject { found: "null" })
        );
    }

    #[test]
    fn test_non_object_arguments_are_absent() {
        let cases = [
            json!(false),
            json!(0),
            json!(""),
            json!([]),
            json!("Bob"),
            json!(["Bob"]),
        ];
        for arguments in cases {
            assert_eq!(
                resolve_name(&json!({ "arguments": arguments })),
                Ok(ResolvedName::ArgumentsAbsent)
            );
        }
    }

    #[test]
    fn test_into_option() {
        assert_eq!(ResolvedName::ArgumentsAbsent.into_option(), None);
        assert_eq!(ResolvedName::NameAbsent.into_option(), Some(None));
        assert_eq!(
            ResolvedName::Provided("Ann".to_string()).into_option(),
            Some(Some("Ann".to_string()))
        );
    }
}
