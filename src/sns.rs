//! SNS-backed custom resources: the CloudFormation request arrives wrapped in an SNS
//! notification, possibly several per invocation.

use std::sync::OnceLock;

use jsonschema::Validator;
use serde_json::{json, Value};

use crate::model::CloudFormationResponse;
use crate::{decode_event, validator, Context, Error, Handler, Map};

fn sns_validator() -> Result<&'static Validator, Error> {
    static VALIDATOR: OnceLock<Result<Validator, String>> = OnceLock::new();
    let compiled = VALIDATOR.get_or_init(|| {
        jsonschema::validator_for(&json!({
            "type": "object",
            "required": ["Records"],
            "additionalProperties": true,
            "properties": {
                "Records": {
                    "type": "array",
                    "items": {"$ref": "#/$defs/sns"},
                },
            },
            "$defs": {
                "sns": {
                    "type": "object",
                    "required": ["Sns"],
                    "properties": {
                        "Sns": {
                            "type": "object",
                            "required": ["Message"],
                            "properties": {
                                "Message": {"type": "string"},
                            },
                        },
                    },
                },
            },
        })).map_err(|e| e.to_string())
    });
    compiled.as_ref().map_err(|e| Error::Envelope(format!("invalid schema: {}", e)))
}

/// Unpacks SNS records and hands each embedded request to a fresh provider from `factory`.
pub struct SnsEnvelope<F> {
    factory: F,
}

impl<F, P> SnsEnvelope<F> where
    F: FnMut() -> P,
    P: Handler,
{
    pub fn new(factory: F) -> Self {
        SnsEnvelope { factory: factory }
    }

    /// Returns one response per record, in record order.
    ///
    /// A malformed envelope fails before any record is handled; a failed delivery aborts the batch.
    pub fn handle(&mut self, event: &Value, context: &Context) -> Result<Vec<CloudFormationResponse>, Error> {
        let requests = unwrap(event)?;

        let mut responses = Vec::with_capacity(requests.len());
        for request in requests {
            let mut provider = (self.factory)();
            responses.push(provider.handle(request, context)?);
        }
        Ok(responses)
    }
}

/// The CloudFormation requests carried by an SNS event.
pub fn unwrap(event: &Value) -> Result<Vec<Map>, Error> {
    if let Some(message) = validator::check(sns_validator()?, event) {
        return Err(Error::Envelope(message))
    }

    let records = event["Records"].as_array().map(|r| &r[..]).unwrap_or_default();
    records.iter().enumerate().map(|(index, record)| {
        let message = record["Sns"]["Message"].as_str().unwrap_or_default();
        decode_event(message).map_err(|source| Error::Message {
            index: index,
            source: source,
        })
    }).collect()
}
