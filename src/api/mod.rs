//! The router's wire surface: the message envelope, the payload objects,
//! and route registration.

pub mod routes;

use {
    crate::{
        domain::{account::AccountId, router::OrderRouter},
        infra::{auth, metrics},
    },
    futures::future::BoxFuture,
    serde::{Deserialize, Serialize},
    std::sync::Arc,
};

/// A routed wire message. Framing and transport belong to the auth
/// manager; the router decodes the payload and mirrors the id on the
/// response.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Message {
    /// Client-chosen id, echoed on the response.
    pub id: u64,
    /// The route name; empty on responses.
    pub route: String,
    pub payload: serde_json::Value,
}

impl Message {
    /// A response to the message with the given id.
    pub fn response(id: u64, payload: serde_json::Value) -> Self {
        Self {
            id,
            route: String::new(),
            payload,
        }
    }
}

type RouteFn =
    fn(Arc<OrderRouter>, AccountId, Message) -> BoxFuture<'static, Result<(), routes::Error>>;

/// Registers the order routes with the router's auth manager. Each
/// registered handler counts the request, runs the route's admission flow,
/// and counts and logs any rejection; the auth manager delivers the error
/// to the client as the reply to the originating message.
pub fn register(router: &Arc<OrderRouter>) {
    let handlers: [(&'static str, RouteFn); 3] = [
        (routes::LIMIT, |router, user, msg| {
            Box::pin(routes::limit::handle(router, user, msg))
        }),
        (routes::MARKET, |router, user, msg| {
            Box::pin(routes::market::handle(router, user, msg))
        }),
        (routes::CANCEL, |router, user, msg| {
            Box::pin(routes::cancel::handle(router, user, msg))
        }),
    ];
    for (name, route) in handlers {
        let handler: auth::Handler = {
            let router = Arc::clone(router);
            Box::new(
                move |user, msg| -> BoxFuture<'static, Result<(), routes::Error>> {
                    let router = Arc::clone(&router);
                    Box::pin(async move {
                        metrics::request(name);
                        let result = route(router, user, msg).await;
                        if let Err(err) = &result {
                            metrics::rejection(err);
                            tracing::debug!(route = name, %err, "order rejected");
                        }
                        result
                    })
                },
            )
        };
        router.auth().route(name, handler);
    }
    tracing::info!("order routes registered");
}
