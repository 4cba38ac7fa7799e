#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;
extern crate serde;
extern crate serde_json;
extern crate jsonschema;
extern crate reqwest;
extern crate thiserror;
extern crate url;
#[cfg(feature = "env_logger")]
extern crate env_logger;

pub use serde_json::Value;

mod error;
mod map;
mod response;
pub mod config;
pub mod model;
pub mod provider;
pub mod sns;
pub mod validator;

pub use config::Config;
pub use error::Error;
pub use map::{heuristic_convert_property_types, Map};
pub use model::{CloudFormationResponse, RequestType, Status};
pub use provider::{custom_resource_name, BaseResource, CustomResource, Fault, Invocation, ResourceProvider};
pub use response::{HttpTransport, Transport};
pub use sns::SnsEnvelope;

/// Opaque invocation context handed through to the resource.
pub type Context = Value;

/// Processes one CloudFormation request and delivers its response.
pub trait Handler {
    fn handle(&mut self, request: Map, context: &Context) -> Result<CloudFormationResponse, Error>;
}

pub fn decode_event(event: &str) -> Result<Map, serde_json::Error> {
    serde_json::from_str(event)
}

/// Logs to stderr, filtered by `RUST_LOG` (default `info`).
#[cfg(feature = "env_logger")]
pub fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init();
}

/// Builds a handler that routes each request by `ResourceType` to a fresh provider.
///
/// Unknown types go to `BaseResource`, which fails them, or succeeds a Delete. Responses are
/// delivered over HTTPS unless `transport = <expr>;` precedes the routes.
///
/// ```no_run
/// # #[macro_use] extern crate cfn_resource_provider;
/// # use cfn_resource_provider::BaseResource;
/// # fn main() {
/// let mut handler = cloudformation! {
///     "Custom::Resource" => BaseResource,
/// };
/// # let _ = &mut handler;
/// # }
/// ```
#[macro_export]
macro_rules! cloudformation {
    (transport = $transport:expr; $($name:literal => $target:expr),* $(,)*) => {
        |event: $crate::Map, context: &$crate::Context| -> Result<$crate::CloudFormationResponse, $crate::Error> {
            let transport = &$transport;
            let resource_type = event.get("ResourceType").and_then(|v| v.as_str()).unwrap_or_default().to_owned();
            match &resource_type[..] {
            $(
                $name => $crate::Handler::handle(&mut $crate::ResourceProvider::with_transport($target, transport), event, context),
            )*
                _ => $crate::Handler::handle(&mut $crate::ResourceProvider::with_transport($crate::BaseResource, transport), event, context),
            }
        }
    };
    ($($name:literal => $target:expr),* $(,)*) => {
        $crate::cloudformation!(transport = $crate::HttpTransport::default(); $($name => $target),*)
    };
}
