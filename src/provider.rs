use std::any;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::panic::{self, AssertUnwindSafe};
use std::sync::OnceLock;

use jsonschema::Validator;
use serde_json::{json, Value};

use crate::config::Config;
use crate::map::{self, Map};
use crate::model::{self, CloudFormationResponse, RequestType, Status};
use crate::response::{self, HttpTransport, Transport};
use crate::validator::{self, SchemaValidationError};
use crate::{Context, Error, Handler};

pub const PHYSICAL_RESOURCE_ID_FAILURE: &str = "could-not-create";
const SERVICE_TOKEN_KEY: &str = "ServiceToken";

/// `Custom::` followed by the provider name without its `Provider` suffix.
///
/// `custom_resource_name("SecretProvider") == "Custom::Secret"`
pub fn custom_resource_name(provider_name: &str) -> String {
    let name = provider_name.strip_suffix("Provider").unwrap_or(provider_name);
    format!("Custom::{}", name)
}

/// An error raised by a resource operation, reported as `<kind>: <message>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fault {
    pub kind: String,
    pub message: String,
}

impl Fault {
    pub fn new<K: Into<String>, M: Into<String>>(kind: K, message: M) -> Self {
        Fault {
            kind: kind.into(),
            message: message.into(),
        }
    }

    pub fn msg<M: Into<String>>(message: M) -> Self {
        Fault::new("Error", message)
    }

    fn from_panic(payload: Box<dyn any::Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_owned(),
                Err(..) => "operation panicked".to_owned(),
            },
        };
        Fault::new("panic", message)
    }
}

impl<E: std::error::Error> From<E> for Fault {
    fn from(err: E) -> Self {
        // `core::num::error::ParseIntError` -> `ParseIntError`
        let name = any::type_name::<E>();
        let name = name.split('<').next().unwrap_or(name);
        let kind = name.rsplit("::").next().unwrap_or(name);
        Fault::new(kind, err.to_string())
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// The three lifecycle operations of a custom resource, and what it accepts as properties.
pub trait CustomResource {
    /// The `ResourceType` this resource handles, e.g. `Custom::Secret`.
    fn custom_cfn_resource_name(&self) -> String;

    /// JSON schema for `ResourceProperties`; declared defaults are injected before validation.
    fn request_schema(&self) -> Value {
        json!({"type": "object"})
    }

    /// Coerces property values before schema validation, CloudFormation sends strings only.
    fn convert_property_types(&self, properties: &mut Map) {
        let _ = properties;
    }

    fn create(&mut self, invocation: &mut Invocation) -> Result<(), Fault> {
        invocation.fail(format!("create not implemented by {}", self.custom_cfn_resource_name()));
        Ok(())
    }

    fn update(&mut self, invocation: &mut Invocation) -> Result<(), Fault> {
        invocation.fail(format!("update not implemented by {}", self.custom_cfn_resource_name()));
        Ok(())
    }

    // a resource that cannot be deleted must not block the stack
    fn delete(&mut self, invocation: &mut Invocation) -> Result<(), Fault> {
        invocation.success_with_reason(format!("delete not implemented by {}", self.custom_cfn_resource_name()));
        Ok(())
    }
}

/// The unextended provider: implements nothing and answers to `Custom::Resource`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BaseResource;

impl CustomResource for BaseResource {
    fn custom_cfn_resource_name(&self) -> String {
        custom_resource_name("ResourceProvider")
    }
}

/// One request, its invocation context and the response being built for it.
#[derive(Clone, Debug, Default)]
pub struct Invocation {
    request: Map,
    context: Context,
    response: CloudFormationResponse,
}

impl Invocation {
    pub fn new(request: Map, context: Context) -> Self {
        let response = CloudFormationResponse::for_request(&request);
        Invocation {
            request: request,
            context: context,
            response: response,
        }
    }

    pub fn request(&self) -> &Map {
        &self.request
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn response(&self) -> &CloudFormationResponse {
        &self.response
    }

    pub fn into_response(self) -> CloudFormationResponse {
        self.response
    }

    fn field(&self, name: &str) -> &str {
        self.request.get(name).and_then(Value::as_str).unwrap_or_default()
    }

    /// `None` unless the request carries one of the three known types.
    pub fn request_type(&self) -> Option<RequestType> {
        self.field(model::REQUEST_TYPE).parse().ok()
    }

    pub fn resource_type(&self) -> &str {
        self.field(model::RESOURCE_TYPE)
    }

    pub fn response_url(&self) -> &str {
        self.field(model::RESPONSE_URL)
    }

    pub fn stack_id(&self) -> &str {
        self.field(model::STACK_ID)
    }

    pub fn request_id(&self) -> &str {
        self.field(model::REQUEST_ID)
    }

    pub fn logical_resource_id(&self) -> &str {
        self.field(model::LOGICAL_RESOURCE_ID)
    }

    pub fn properties(&self) -> &Map {
        self.object(model::RESOURCE_PROPERTIES)
    }

    /// Properties before an update; empty when the request has none.
    pub fn old_properties(&self) -> &Map {
        self.object(model::OLD_RESOURCE_PROPERTIES)
    }

    fn object(&self, name: &str) -> &Map {
        self.request.get(name).and_then(Value::as_object).unwrap_or_else(|| map::empty())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties().get(name)
    }

    pub fn get_or(&self, name: &str, default: Value) -> Value {
        self.get(name).cloned().unwrap_or(default)
    }

    pub fn get_old(&self, name: &str) -> Option<&Value> {
        self.old_properties().get(name)
    }

    pub fn get_old_or(&self, name: &str, default: Value) -> Value {
        self.get_old(name).cloned().unwrap_or(default)
    }

    /// Initialized from the request, absent on Create until the resource assigns one.
    pub fn physical_resource_id(&self) -> Option<&str> {
        self.response.physical_resource_id.as_deref()
    }

    pub fn set_physical_resource_id<S: Into<String>>(&mut self, physical_resource_id: S) {
        self.response.physical_resource_id = Some(physical_resource_id.into());
    }

    pub fn status(&self) -> Status {
        self.response.status
    }

    pub fn reason(&self) -> &str {
        &self.response.reason
    }

    pub fn set_reason<S: Into<String>>(&mut self, reason: S) {
        self.response.reason = reason.into();
    }

    /// Marks the request successful, keeping the current reason.
    pub fn success(&mut self) {
        self.response.status = Status::Success;
    }

    pub fn success_with_reason<S: Into<String>>(&mut self, reason: S) {
        self.success();
        self.set_reason(reason);
    }

    pub fn fail<S: Into<String>>(&mut self, reason: S) {
        self.response.status = Status::Failed;
        self.set_reason(reason);
    }

    /// Sets an attribute, retrievable with `Fn::GetAtt`.
    pub fn set_attribute<K: Into<String>, V: Into<Value>>(&mut self, name: K, value: V) {
        self.response.data.insert(name.into(), value.into());
    }

    pub fn get_attribute(&self, name: &str) -> Option<&Value> {
        self.response.data.get(name)
    }

    pub fn no_echo(&self) -> Option<bool> {
        self.response.no_echo
    }

    /// Asks CloudFormation to mask the attribute values.
    pub fn set_no_echo(&mut self, no_echo: bool) {
        self.response.no_echo = Some(no_echo);
    }

    pub fn truncate_reason(&mut self, max: usize) {
        self.response.truncate_reason(max)
    }
}

fn request_validator() -> &'static Result<Validator, String> {
    static VALIDATOR: OnceLock<Result<Validator, String>> = OnceLock::new();
    VALIDATOR.get_or_init(|| {
        jsonschema::validator_for(&json!({
            "type": "object",
            "required": ["RequestType", "ResponseURL", "StackId", "RequestId", "ResourceType",
                         "LogicalResourceId", "ResourceProperties"],
            "properties": {
                "RequestType": {"type": "string", "enum": ["Create", "Update", "Delete"]},
                "ResponseURL": {"type": "string", "format": "uri", "pattern": "^https?://"},
                "StackId": {"type": "string"},
                "RequestId": {"type": "string"},
                "ResourceType": {"type": "string"},
                "LogicalResourceId": {"type": "string"},
                "PhysicalResourceId": {"type": "string"},
                "ResourceProperties": {"type": "object"},
                "OldResourceProperties": {"type": "object"},
            },
        })).map_err(|e| e.to_string())
    })
}

fn response_validator() -> &'static Result<Validator, String> {
    static VALIDATOR: OnceLock<Result<Validator, String>> = OnceLock::new();
    VALIDATOR.get_or_init(|| {
        jsonschema::validator_for(&json!({
            "required": ["Status", "Reason", "RequestId", "StackId", "LogicalResourceId",
                         "PhysicalResourceId", "Data"],
            "properties": {
                "Status": {"type": "string", "enum": ["SUCCESS", "FAILED"]},
                "Reason": {"type": "string"},
                "StackId": {"type": "string"},
                "RequestId": {"type": "string"},
                "LogicalResourceId": {"type": "string"},
                "PhysicalResourceId": {"type": "string", "minLength": 1},
                "Data": {"type": "object"},
                "NoEcho": {"type": "boolean"},
            },
        })).map_err(|e| e.to_string())
    })
}

fn check(compiled: &Result<Validator, String>, document: &Value) -> Option<String> {
    match compiled {
        Ok(compiled) => validator::check(compiled, document),
        Err(err) => Some(format!("invalid schema: {}", err)),
    }
}

/// Drives one custom resource through a single lifecycle event.
///
/// Construct one per event: `set_request`, `execute`, then the response is delivered. `handle`
/// does all three. Every event produces exactly one response, and only delivery failures
/// surface as errors.
pub struct ResourceProvider<R, T = HttpTransport> {
    resource: R,
    transport: T,
    config: Config,
    invocation: Invocation,
}

impl<R: CustomResource> ResourceProvider<R> {
    pub fn new(resource: R) -> Self {
        Self::with_config(resource, Config::default())
    }

    pub fn with_config(resource: R, config: Config) -> Self {
        let transport = HttpTransport::from_config(&config);
        ResourceProvider::with_transport(resource, transport).config(config)
    }
}

impl<R: CustomResource, T: Transport> ResourceProvider<R, T> {
    pub fn with_transport(resource: R, transport: T) -> Self {
        ResourceProvider {
            resource: resource,
            transport: transport,
            config: Config::default(),
            invocation: Invocation::default(),
        }
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    pub fn invocation(&self) -> &Invocation {
        &self.invocation
    }

    pub fn custom_cfn_resource_name(&self) -> String {
        self.resource.custom_cfn_resource_name()
    }

    /// Attaches the request and starts a fresh `SUCCESS` response for it. Does not validate.
    pub fn set_request(&mut self, request: Map, context: Context) {
        self.invocation = Invocation::new(request, context);
    }

    /// Checks the request against the CloudFormation request schema; on violation the response fails.
    pub fn is_valid_cfn_request(&mut self) -> bool {
        let request = Value::Object(self.invocation.request.clone());
        match check(request_validator(), &request) {
            None => true,
            Some(message) => {
                self.invocation.fail(format!("invalid CloudFormation Request received: {}", message));
                false
            },
        }
    }

    /// Checks the response against the CloudFormation response schema, logging a mismatch.
    pub fn is_valid_cfn_response(&self) -> bool {
        let response = match serde_json::to_value(&self.invocation.response) {
            Ok(response) => response,
            Err(err) => {
                warn!("invalid CloudFormation response created: {}", err);
                return false
            },
        };
        match check(response_validator(), &response) {
            None => true,
            Some(message) => {
                warn!("invalid CloudFormation response created: {}", message);
                false
            },
        }
    }

    pub fn is_supported_request(&self) -> bool {
        self.invocation.resource_type() == self.resource.custom_cfn_resource_name()
    }

    pub fn convert_property_types(&mut self) {
        if let Some(Value::Object(properties)) = self.invocation.request.get_mut(model::RESOURCE_PROPERTIES) {
            self.resource.convert_property_types(properties);
        }
    }

    pub fn heuristic_convert_property_types(&self, properties: &mut Map) {
        map::heuristic_convert_property_types(properties)
    }

    /// Converts and validates the properties, replacing them with the defaulted version.
    ///
    /// `ServiceToken` is not validated against the schema, but stays in the properties.
    pub fn is_valid_request(&mut self) -> bool {
        self.convert_property_types();

        let schema = self.resource.request_schema();
        let mut properties = self.invocation.request.get(model::RESOURCE_PROPERTIES).cloned().unwrap_or(Value::Null);
        let service_token = properties.as_object_mut().and_then(|p| p.remove(SERVICE_TOKEN_KEY));
        match validator::validate(properties, &schema) {
            Ok(mut properties) => {
                if let (Some(token), Some(object)) = (service_token, properties.as_object_mut()) {
                    object.insert(SERVICE_TOKEN_KEY.into(), token);
                }
                self.invocation.request.insert(model::RESOURCE_PROPERTIES.into(), properties);
                true
            },
            Err(err) => {
                error!("invalid resource properties: {}", err);
                let reason = match err {
                    SchemaValidationError::Invalid(message) => message,
                    err => err.to_string(),
                };
                self.invocation.fail(format!("invalid resource properties: {}", reason));
                false
            },
        }
    }

    /// Validates the request and calls the matching operation.
    ///
    /// A Delete that cannot be processed still succeeds, so a broken provider or a bad request
    /// never leaves a stack stuck in DELETE_FAILED.
    pub fn execute(&mut self) {
        let is_delete = self.invocation.request_type() == Some(RequestType::Delete);

        if !self.is_valid_cfn_request() {
            if is_delete {
                self.invocation.success();
            }
        } else if !self.is_supported_request() {
            let reason = format!("ResourceType {} not supported by provider {}",
                self.invocation.resource_type(), self.resource.custom_cfn_resource_name());
            self.invocation.fail(reason);
            if is_delete {
                self.invocation.success();
            }
        } else if !self.is_valid_request() {
            if is_delete {
                self.invocation.success();
            }
        } else if let Some(request_type) = self.invocation.request_type() {
            self.dispatch(request_type);
        }

        self.ensure_response_invariants();
    }

    fn dispatch(&mut self, request_type: RequestType) {
        let resource = &mut self.resource;
        let invocation = &mut self.invocation;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| match request_type {
            RequestType::Create => resource.create(invocation),
            RequestType::Update => resource.update(invocation),
            RequestType::Delete => resource.delete(invocation),
        })).unwrap_or_else(|payload| Err(Fault::from_panic(payload)));

        if let Err(fault) = outcome {
            error!("{} of {} {} failed: {}", request_type.operation(),
                self.invocation.resource_type(), self.invocation.logical_resource_id(), fault);
            // keep the reason the operation failed with itself
            if self.invocation.status() != Status::Failed || self.invocation.reason().is_empty() {
                self.invocation.fail(fault.to_string());
            }
        }
    }

    fn ensure_response_invariants(&mut self) {
        if self.invocation.status() == Status::Failed && self.invocation.reason().is_empty() {
            let operation = self.invocation.request_type().map_or("request", |t| t.operation());
            let reason = format!("{} failed without a reason", operation);
            warn!("{} {}", self.resource.custom_cfn_resource_name(), reason);
            self.invocation.set_reason(reason);
        }

        if self.invocation.physical_resource_id().map_or(false, |id| !id.is_empty()) {
            return
        }

        match self.invocation.status() {
            Status::Failed => self.invocation.set_physical_resource_id(PHYSICAL_RESOURCE_ID_FAILURE),
            Status::Success => {
                let physical_resource_id = format!("{}-{}",
                    self.invocation.logical_resource_id(), self.invocation.request_id());
                warn!("{} did not set a PhysicalResourceId, using {}",
                    self.resource.custom_cfn_resource_name(), physical_resource_id);
                self.invocation.set_physical_resource_id(physical_resource_id);
            },
        }
    }

    /// Delivers the response to `ResponseURL`.
    pub fn send_response(&mut self) -> Result<(), Error> {
        self.invocation.truncate_reason(self.config.max_reason_length);
        self.is_valid_cfn_response();

        let result = response::send(&self.transport, self.invocation.response_url(), &self.invocation.response);
        if let Err(ref err) = result {
            error!("{}", err);
        }
        result
    }
}

impl<R: CustomResource, T: Transport> Handler for ResourceProvider<R, T> {
    fn handle(&mut self, request: Map, context: &Context) -> Result<CloudFormationResponse, Error> {
        debug!("received request {}", Value::Object(request.clone()));
        self.set_request(request, context.clone());
        self.execute();
        self.send_response()?;
        Ok(self.invocation.response.clone())
    }
}

impl<R, T> Deref for ResourceProvider<R, T> {
    type Target = Invocation;

    fn deref(&self) -> &Self::Target {
        &self.invocation
    }
}

impl<R, T> DerefMut for ResourceProvider<R, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.invocation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(request_type: &str, physical_resource_id: Option<&str>) -> Map {
        let mut request = json!({
            "RequestType": request_type,
            "ResponseURL": "https://httpbin.org/put",
            "StackId": "arn:aws:cloudformation:us-west-2:EXAMPLE/stack-name/guid",
            "RequestId": "request-0f57e9e5",
            "ResourceType": "Custom::Resource",
            "LogicalResourceId": "MyCustomResource",
            "ResourceProperties": {"Name": "bla"},
        });
        if let Some(id) = physical_resource_id {
            request["PhysicalResourceId"] = id.into();
        }
        match request {
            Value::Object(request) => request,
            _ => unreachable!(),
        }
    }

    fn provider(request: Map) -> ResourceProvider<BaseResource> {
        let mut provider = ResourceProvider::new(BaseResource);
        provider.set_request(request, json!({}));
        provider
    }

    #[test]
    fn names() {
        assert_eq!(BaseResource.custom_cfn_resource_name(), "Custom::Resource");
        assert_eq!(custom_resource_name("SecretProvider"), "Custom::Secret");
        assert_eq!(custom_resource_name("Secret"), "Custom::Secret");
    }

    #[test]
    fn set_request() {
        let context = json!({"bla": "bla"});
        let mut provider = ResourceProvider::new(BaseResource);
        provider.set_request(request("Create", Some("abc")), context.clone());
        assert_eq!(provider.context(), &context);
        assert_eq!(provider.request_type(), Some(RequestType::Create));
        assert_eq!(provider.resource_type(), "Custom::Resource");
        assert_eq!(provider.response().stack_id, provider.stack_id());
        assert_eq!(provider.response().request_id, provider.request_id());
        assert_eq!(provider.response().logical_resource_id, provider.logical_resource_id());
        assert_eq!(provider.physical_resource_id(), Some("abc"));
        assert_eq!(provider.status(), Status::Success);
        assert_eq!(provider.reason(), "");
        assert!(provider.response().data.is_empty());
    }

    #[test]
    fn valid_cfn_request() {
        let mut provider = provider(request("Create", Some("abc")));
        assert!(provider.is_valid_cfn_request(), "{}", provider.reason());
        assert_eq!(provider.response_url(), "https://httpbin.org/put");
        assert_eq!(provider.status(), Status::Success);

        let mut provider = self::provider(request("create", Some("abc")));
        assert!(!provider.is_valid_cfn_request());
        assert_eq!(provider.status(), Status::Failed);
        assert!(provider.reason().starts_with("invalid CloudFormation Request received: "), "{}", provider.reason());
    }

    #[test]
    fn response_url_scheme() {
        let mut request = request("Create", None);
        request.insert("ResponseURL".into(), "ftp://example.com/put".into());
        let mut provider = provider(request);
        assert!(!provider.is_valid_cfn_request());
    }

    #[test]
    fn valid_cfn_response() {
        let provider = provider(request("Create", Some("abc")));
        assert!(provider.is_valid_cfn_response());

        let provider = self::provider(request("Create", None));
        assert!(!provider.is_valid_cfn_response());
    }

    #[test]
    fn properties() {
        let mut request = request("Update", Some("abc"));
        request.insert("ResourceProperties".into(), json!({"Test": "123"}));
        let provider = provider(request.clone());
        assert!(provider.old_properties().is_empty());
        assert_eq!(provider.get("Test"), Some(&json!("123")));
        assert_eq!(provider.get("Notthere"), None);
        assert_eq!(provider.get_or("Notthere", json!("mooi")), json!("mooi"));

        request.insert("OldResourceProperties".into(), json!({"Test": 2}));
        let provider = self::provider(request);
        assert_eq!(provider.get_old("Test"), Some(&json!(2)));
        assert_eq!(provider.get_old_or("Notthere", json!("mooi")), json!("mooi"));
    }

    #[test]
    fn response_setters() {
        let mut provider = provider(request("Create", Some("abc")));
        provider.set_physical_resource_id("AAAAAAAAAAAAAAAA");
        assert_eq!(provider.physical_resource_id(), Some("AAAAAAAAAAAAAAAA"));
        assert_eq!(provider.request()["PhysicalResourceId"], "abc");

        provider.set_attribute("Secret", "123132");
        assert_eq!(provider.get_attribute("Secret"), Some(&json!("123132")));
        assert_eq!(provider.response().data["Secret"], "123132");

        provider.success_with_reason("yeah!");
        assert_eq!((provider.status(), provider.reason()), (Status::Success, "yeah!"));
        provider.fail("ohno");
        assert_eq!((provider.status(), provider.reason()), (Status::Failed, "ohno"));
        provider.success();
        assert_eq!((provider.status(), provider.reason()), (Status::Success, "ohno"));

        assert_eq!(provider.no_echo(), None);
        provider.set_no_echo(true);
        assert_eq!(provider.no_echo(), Some(true));
        provider.set_no_echo(false);
        assert_eq!(provider.no_echo(), Some(false));
    }

    #[test]
    fn unsupported_type() {
        let mut request = request("Create", Some("abc"));
        request.insert("ResourceType".into(), "Custom::Secret".into());
        let mut provider = provider(request.clone());
        assert!(provider.is_valid_cfn_request());
        assert!(provider.is_valid_request());
        assert!(!provider.is_supported_request());

        provider.set_request(request.clone(), json!({}));
        provider.execute();
        assert_eq!(provider.status(), Status::Failed);
        assert_eq!(provider.reason(), "ResourceType Custom::Secret not supported by provider Custom::Resource");
        assert_eq!(provider.physical_resource_id(), Some("abc"));

        request.insert("RequestType".into(), "Delete".into());
        provider.set_request(request, json!({}));
        provider.execute();
        assert_eq!(provider.status(), Status::Success);
        assert_eq!(provider.reason(), "ResourceType Custom::Secret not supported by provider Custom::Resource");
    }

    #[test]
    fn unimplemented_operations() {
        let mut provider = provider(request("Create", None));
        provider.execute();
        assert_eq!(provider.status(), Status::Failed);
        assert!(provider.reason().starts_with("create not implemented"), "{}", provider.reason());
        assert_eq!(provider.physical_resource_id(), Some(PHYSICAL_RESOURCE_ID_FAILURE));

        provider.set_request(request("Update", Some("abc")), json!({}));
        provider.execute();
        assert_eq!(provider.status(), Status::Failed);
        assert!(provider.reason().starts_with("update not implemented"), "{}", provider.reason());
        assert_eq!(provider.physical_resource_id(), Some("abc"));

        provider.set_request(request("Delete", Some("abc")), json!({}));
        provider.execute();
        assert_eq!(provider.status(), Status::Success);
        assert!(provider.reason().starts_with("delete not implemented"), "{}", provider.reason());
    }

    #[test]
    fn malformed_delete_succeeds() {
        let mut request = request("Delete", Some("abc"));
        request.remove("StackId");
        let mut provider = provider(request);
        provider.execute();
        assert_eq!(provider.status(), Status::Success);
        assert!(!provider.reason().is_empty());
        assert_eq!(provider.response().stack_id, "");
    }

    #[test]
    fn malformed_create_fails() {
        let mut request = request("Create", None);
        request.remove("ResourceProperties");
        let mut provider = provider(request);
        provider.execute();
        assert_eq!(provider.status(), Status::Failed);
        assert!(!provider.reason().is_empty());
        assert_eq!(provider.physical_resource_id(), Some(PHYSICAL_RESOURCE_ID_FAILURE));
    }

    #[test]
    fn fault_kind() {
        let fault = Fault::from("12a".parse::<u8>().unwrap_err());
        assert_eq!(fault.kind, "ParseIntError");
        assert_eq!(fault.to_string(), "ParseIntError: invalid digit found in string");
        assert_eq!(Fault::new("ValueError", "X").to_string(), "ValueError: X");
    }
}
