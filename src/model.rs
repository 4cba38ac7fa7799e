use std::fmt;
use std::str::FromStr;

use crate::Map;

pub const REQUEST_TYPE: &str = "RequestType";
pub const RESPONSE_URL: &str = "ResponseURL";
pub const STACK_ID: &str = "StackId";
pub const REQUEST_ID: &str = "RequestId";
pub const RESOURCE_TYPE: &str = "ResourceType";
pub const LOGICAL_RESOURCE_ID: &str = "LogicalResourceId";
pub const PHYSICAL_RESOURCE_ID: &str = "PhysicalResourceId";
pub const RESOURCE_PROPERTIES: &str = "ResourceProperties";
pub const OLD_RESOURCE_PROPERTIES: &str = "OldResourceProperties";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestType {
    Create,
    Update,
    Delete,
}

impl RequestType {
    pub fn as_str(&self) -> &'static str {
        match *self {
            RequestType::Create => "Create",
            RequestType::Update => "Update",
            RequestType::Delete => "Delete",
        }
    }

    /// Operation name as used in reasons, e.g. `create not implemented by ...`.
    pub fn operation(&self) -> &'static str {
        match *self {
            RequestType::Create => "create",
            RequestType::Update => "update",
            RequestType::Delete => "delete",
        }
    }
}

impl FromStr for RequestType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Create" => Ok(RequestType::Create),
            "Update" => Ok(RequestType::Update),
            "Delete" => Ok(RequestType::Delete),
            _ => Err(()),
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Success,
    Failed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Status::Success => "SUCCESS",
            Status::Failed => "FAILED",
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CloudFormationResponse {
    pub status: Status,
    pub reason: String,
    pub physical_resource_id: Option<String>,
    pub stack_id: String,
    pub request_id: String,
    pub logical_resource_id: String,
    pub data: Map,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_echo: Option<bool>,
}

impl CloudFormationResponse {
    /// Response skeleton for `request`: identifiers copied, `SUCCESS`, no reason, no data.
    pub fn for_request(request: &Map) -> Self {
        let field = |name: &str| request.get(name).and_then(|v| v.as_str()).unwrap_or_default().to_owned();

        CloudFormationResponse {
            status: Status::Success,
            reason: String::new(),
            physical_resource_id: request.get(PHYSICAL_RESOURCE_ID).and_then(|v| v.as_str()).map(Into::into),
            stack_id: field(STACK_ID),
            request_id: field(REQUEST_ID),
            logical_resource_id: field(LOGICAL_RESOURCE_ID),
            data: Default::default(),
            no_echo: None,
        }
    }

    /// Caps the reason at `max` characters, ending a cut reason with `...` when it fits.
    pub fn truncate_reason(&mut self, max: usize) {
        if self.reason.chars().count() > max {
            let reason: String = if max < 3 {
                self.reason.chars().take(max).collect()
            } else {
                self.reason.chars().take(max - 3).chain("...".chars()).collect()
            };
            self.reason = reason;
        }
    }
}

impl Default for CloudFormationResponse {
    fn default() -> Self {
        CloudFormationResponse::for_request(&Map::new())
    }
}
