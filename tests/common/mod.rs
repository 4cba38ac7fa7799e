#![allow(dead_code)]

use std::cell::RefCell;

use cfn_resource_provider::{Error, Map, Transport, Value};
use serde_json::json;
use url::Url;

/// Keeps every delivered response instead of sending it.
#[derive(Default)]
pub struct Recorder {
    pub sent: RefCell<Vec<(Url, Value)>>,
    pub status: Option<u16>,
}

impl Recorder {
    pub fn failing(status: u16) -> Self {
        Recorder {
            sent: Default::default(),
            status: Some(status),
        }
    }

    pub fn bodies(&self) -> Vec<Value> {
        self.sent.borrow().iter().map(|(_, body)| body.clone()).collect()
    }
}

impl Transport for Recorder {
    fn put(&self, url: &Url, body: &str) -> Result<(), Error> {
        self.sent.borrow_mut().push((url.clone(), serde_json::from_str(body)?));
        match self.status {
            Some(status) => Err(Error::Delivery {
                url: url.clone(),
                status: status,
                body: "AccessDenied".into(),
            }),
            None => Ok(()),
        }
    }
}

pub fn request(request_type: &str, resource_type: &str, physical_resource_id: Option<&str>) -> Map {
    let mut request = json!({
        "RequestType": request_type,
        "ResponseURL": "https://cloudformation-custom-resource-response-euwest1.s3.amazonaws.com/put?sig=abc",
        "StackId": "arn:aws:cloudformation:us-west-2:EXAMPLE/stack-name/guid",
        "RequestId": format!("request-{}-{}", request_type, resource_type),
        "ResourceType": resource_type,
        "LogicalResourceId": "MyCustomResource",
        "ResourceProperties": {"ServiceToken": "arn:aws:lambda:eu-central-1::function:provider", "Name": "bla"},
    });
    if let Some(id) = physical_resource_id {
        request["PhysicalResourceId"] = id.into();
    }
    match request {
        Value::Object(request) => request,
        _ => unreachable!(),
    }
}
