use id::AsId;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
pub enum Method {
    #[serde(rename = "GET")]
    Get,
    #[serde(rename = "HEAD")]
    Head,
    #[serde(rename = "OPTIONS")]
    Options,
    #[serde(rename = "POST")]
    Post,
    #[serde(rename = "PUT")]
    Put,
    #[serde(rename = "PATCH")]
    Patch,
    #[serde(rename = "DELETE")]
    Delete
}

/// What a method does to a resource, as far as the rules care.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Read,
    Create,
    Update,
    Delete
}

impl Method {
    /// GET, HEAD and OPTIONS. Anything safe is a read.
    pub fn safe(self) -> bool {
        use self::Method::*;

        match self {
            Get | Head | Options => true,
            Post | Put | Patch | Delete => false
        }
    }

    pub fn action(self) -> Action {
        use self::Method::*;

        if self.safe() {
            return Action::Read;
        }

        match self {
            Put | Patch => Action::Update,
            Delete => Action::Delete,
            _ => Action::Create
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Resource {
    School,
    Delegate,
    Assignment,
    Registration
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Scope {
    List,
    Detail
}

/// The guard protecting an endpoint. Each one has its rows in the rule
/// table; an action with no row is denied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
pub enum Policy {
    #[serde(rename = "school_detail")]
    SchoolDetail,
    #[serde(rename = "delegate_detail")]
    DelegateDetail,
    #[serde(rename = "delegate_list")]
    DelegateList,
    #[serde(rename = "assignment_detail")]
    AssignmentDetail,
    #[serde(rename = "assignment_list")]
    AssignmentList,
    #[serde(rename = "registration_detail")]
    RegistrationDetail,
    #[serde(rename = "registration_list")]
    RegistrationList,
    #[serde(rename = "delegate_password")]
    DelegatePassword,
    #[serde(rename = "create_only")]
    CreateOnly,
    #[serde(rename = "read_only")]
    ReadOnly,
    #[serde(rename = "own_user")]
    OwnUser,
    #[serde(rename = "school_advisor")]
    SchoolAdvisor,
    #[serde(rename = "school_by_path")]
    SchoolByPath,
    #[serde(rename = "assignment_advisor")]
    AssignmentAdvisor
}

impl Policy {
    /// The guard for a resource's collection or member endpoint.
    pub fn of(resource: Resource, scope: Scope) -> Policy {
        match (resource, scope) {
            (Resource::School, Scope::Detail) => Policy::SchoolDetail,
            (Resource::School, Scope::List) => Policy::CreateOnly,
            (Resource::Delegate, Scope::Detail) => Policy::DelegateDetail,
            (Resource::Delegate, Scope::List) => Policy::DelegateList,
            (Resource::Assignment, Scope::Detail) => Policy::AssignmentDetail,
            (Resource::Assignment, Scope::List) => Policy::AssignmentList,
            (Resource::Registration, Scope::Detail) =>
                Policy::RegistrationDetail,
            (Resource::Registration, Scope::List) => Policy::RegistrationList
        }
    }
}

/// One action against one endpoint. `id` is the raw path key, `query` the
/// raw query string parameters and `payload` the decoded request body.
#[derive(Clone, Debug, Deserialize)]
pub struct Request {
    pub policy: Policy,
    pub method: Method,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub query: HashMap<String, String>,
    #[serde(default)]
    pub payload: Option<Value>
}

impl Request {
    pub fn new(policy: Policy, method: Method) -> Request {
        Request {
            policy: policy,
            method: method,
            id: None,
            query: HashMap::new(),
            payload: None
        }
    }

    pub fn with_id(mut self, id: &str) -> Request {
        self.id = Some(Value::String(id.to_owned()));
        self
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Request {
        self.query.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn with_payload(mut self, payload: Value) -> Request {
        self.payload = Some(payload);
        self
    }

    pub fn action(&self) -> Action {
        self.method.action()
    }

    /// The path key, if there is one and it's a number.
    pub fn key(&self) -> Option<i64> {
        self.id.as_id()
    }

    pub fn query_id(&self, key: &str) -> Option<i64> {
        self.query.get(key).as_id()
    }

    /// A top-level field of an object body.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.payload.as_ref()
            .and_then(Value::as_object)
            .and_then(|object| object.get(key))
    }

    /// The `id` of every element of a list body. Elements without a usable
    /// id come back as `None` so the caller can refuse the whole batch.
    pub fn batch(&self) -> Option<Vec<Option<i64>>> {
        self.payload.as_ref()
            .and_then(Value::as_array)
            .map(|items| items.iter()
                .map(|item| item.as_object()
                    .and_then(|object| object.get("id"))
                    .as_id())
                .collect())
    }
}
