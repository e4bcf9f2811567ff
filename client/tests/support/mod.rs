#![allow(dead_code)]

use client::{ClientError, HttpRequest, HttpResponse, Transport};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const BASE: &str = "http://koi.test";

/// Replies by URL and records every request it sees.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    replies: Rc<RefCell<HashMap<String, Result<HttpResponse, ClientError>>>>,
    seen: Rc<RefCell<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn reply(self, url: &str, status: u16, body: &str) -> Self {
        self.replies
            .borrow_mut()
            .insert(url.to_string(), Ok(HttpResponse { status, body: body.to_string() }));
        self
    }

    pub fn fail(self, url: &str, message: &str) -> Self {
        self.replies
            .borrow_mut()
            .insert(url.to_string(), Err(ClientError::Network(message.to_string())));
        self
    }

    pub fn seen(&self) -> Vec<HttpRequest> {
        self.seen.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        self.seen.borrow_mut().push(request.clone());
        self.replies
            .borrow()
            .get(&request.url)
            .cloned()
            .unwrap_or_else(|| Err(ClientError::Network(format!("no route to {}", request.url))))
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
