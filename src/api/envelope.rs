use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

/// Outcome discriminant for an [`Envelope`].
///
/// Each kind owns its canonical `(success, error, warning)` flag triple, so
/// the boolean fields on the wire can never disagree with the `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Success,
    Error,
    Info,
    Warning,
}

impl Kind {
    /// The `(success, error, warning)` triple mirrored into the envelope.
    ///
    /// `Info` sets none of the three flags.
    pub fn flags(self) -> (bool, bool, bool) {
        match self {
            Kind::Success => (true, false, false),
            Kind::Error => (false, true, false),
            Kind::Info => (false, false, false),
            Kind::Warning => (false, false, true),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Info => "info",
            Kind::Warning => "warning",
        }
    }
}

fn is_false(v: &bool) -> bool {
    !*v
}

fn is_zero(v: &i64) -> bool {
    *v == 0
}

/// Hypermedia hint describing an available follow-up operation.
///
/// Actions are immutable once built and owned by the envelope they are
/// appended to. Empty fields and `required = false` are left off the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub action_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub method: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "is_false")]
    pub required: bool,
}

impl Action {
    pub fn new(
        action_type: impl Into<String>,
        name: impl Into<String>,
        code: impl Into<String>,
        method: impl Into<String>,
        url: impl Into<String>,
        required: bool,
    ) -> Self {
        Self {
            action_type: action_type.into(),
            name: name.into(),
            code: code.into(),
            method: method.into(),
            url: url.into(),
            required,
        }
    }
}

/// The standardized response wrapper returned by every call from this layer.
///
/// The flag fields are derived from [`Kind`] at construction and the
/// timestamp is assigned exactly once; neither can be changed afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    success: bool,
    error: bool,
    warning: bool,
    #[serde(rename = "type")]
    kind: Kind,
    msg: String,
    #[serde(skip_serializing_if = "is_zero")]
    code: i64,
    payload: Value,
    timestamp: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    actions: Vec<Action>,
}

impl Envelope {
    pub fn new(kind: Kind, msg: impl Into<String>, code: i64, payload: Value) -> Self {
        let (success, error, warning) = kind.flags();
        Self {
            success,
            error,
            warning,
            kind,
            msg: msg.into(),
            code,
            payload,
            timestamp: Utc::now().timestamp(),
            actions: Vec::new(),
        }
    }

    pub fn ok(msg: impl Into<String>, code: i64, payload: Value) -> Self {
        Self::new(Kind::Success, msg, code, payload)
    }

    pub fn err(msg: impl Into<String>, code: i64, payload: Value) -> Self {
        Self::new(Kind::Error, msg, code, payload)
    }

    pub fn info(msg: impl Into<String>, code: i64, payload: Value) -> Self {
        Self::new(Kind::Info, msg, code, payload)
    }

    pub fn warn(msg: impl Into<String>, code: i64, payload: Value) -> Self {
        Self::new(Kind::Warning, msg, code, payload)
    }

    /// Appends one action hint. Insertion order is display order.
    pub fn add_action(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Builder-style variant of [`add_action`](Self::add_action).
    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }

    pub fn code(&self) -> i64 {
        self.code
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_flags_match_type_tag() {
        assert_eq!(Kind::Success.flags(), (true, false, false));
        assert_eq!(Kind::Error.flags(), (false, true, false));
        assert_eq!(Kind::Warning.flags(), (false, false, true));
    }

    #[test]
    fn info_sets_no_flags() {
        assert_eq!(Kind::Info.flags(), (false, false, false));
        let env = Envelope::info("heads up", 0, Value::Null);
        let body = serde_json::to_value(&env).unwrap();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!(false));
        assert_eq!(body["warning"], json!(false));
        assert_eq!(body["type"], json!("info"));
    }

    #[test]
    fn ok_envelope_serializes_expected_shape() {
        let env = Envelope::ok("created", 7, json!({"id": 42}));
        let body = serde_json::to_value(&env).unwrap();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["error"], json!(false));
        assert_eq!(body["warning"], json!(false));
        assert_eq!(body["type"], json!("success"));
        assert_eq!(body["msg"], json!("created"));
        assert_eq!(body["code"], json!(7));
        assert_eq!(body["payload"], json!({"id": 42}));
        assert!(body["timestamp"].is_i64());
    }

    #[test]
    fn actions_preserve_insertion_order() {
        let mut env = Envelope::ok("ok", 0, Value::Null);
        env.add_action(Action::new("link", "first", "", "GET", "/a", false));
        env.add_action(Action::new("link", "second", "", "POST", "/b", true));
        env.add_action(Action::new("link", "third", "", "GET", "/c", false));

        let names: Vec<&str> = env.actions().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);

        let body = serde_json::to_value(&env).unwrap();
        assert_eq!(body["actions"][0]["name"], json!("first"));
        assert_eq!(body["actions"][1]["name"], json!("second"));
        assert_eq!(body["actions"][2]["name"], json!("third"));
    }

    #[test]
    fn zero_code_and_empty_actions_are_omitted() {
        let env = Envelope::err("boom", 0, Value::Null);
        let body = serde_json::to_value(&env).unwrap();
        assert!(body.get("code").is_none());
        assert!(body.get("actions").is_none());
        assert_eq!(body["payload"], Value::Null);
    }

    #[test]
    fn empty_action_fields_are_omitted() {
        let action = Action::new("redirect", "", "", "GET", "/login", false);
        let body = serde_json::to_value(&action).unwrap();
        assert_eq!(body["type"], json!("redirect"));
        assert_eq!(body["method"], json!("GET"));
        assert_eq!(body["url"], json!("/login"));
        assert!(body.get("name").is_none());
        assert!(body.get("code").is_none());
        assert!(body.get("required").is_none());
    }

    #[test]
    fn required_action_keeps_flag_on_wire() {
        let action = Action::new("confirm", "confirm_tx", "42", "POST", "/confirm", true);
        let body = serde_json::to_value(&action).unwrap();
        assert_eq!(body["required"], json!(true));
        assert_eq!(body["code"], json!("42"));
    }
}
