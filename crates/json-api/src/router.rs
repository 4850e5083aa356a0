//! App Router

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, Server as ApiServer, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};

use turtleman_app::context::AppContext;

use crate::{config::docs::DocsConfig, customers, healthcheck, observability, state::State};

const OPENAPI_PATH: &str = "/api-doc/openapi.json";

pub(crate) fn customers_router() -> Router {
    Router::with_path("api/customers")
        .post(customers::create::handler)
        .push(
            Router::with_path("{id}")
                .get(customers::get::handler)
                .put(customers::update::handler)
                .delete(customers::delete::handler),
        )
}

/// Application service: the full router plus the customer error envelope catcher.
pub(crate) fn app_service(app: AppContext, docs: &DocsConfig) -> Service {
    Service::new(app_router(app, docs)).catcher(customers::errors::envelope_catcher())
}

/// Full application router, with API documentation when enabled.
pub(crate) fn app_router(app: AppContext, docs: &DocsConfig) -> Router {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request_logging)
        .hoop(inject(State::from_app_context(app)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(customers_router());

    if !docs.docs_enabled {
        return router;
    }

    let doc = api_doc(docs).merge_router(&router);

    router
        .push(doc.into_router(OPENAPI_PATH))
        .push(SwaggerUi::new(OPENAPI_PATH).into_router("docs"))
}

fn api_doc(docs: &DocsConfig) -> OpenApi {
    let servers = [
        (&docs.api_dev_url, "Server URL in Development environment"),
        (&docs.api_prod_url, "Server URL in Production environment"),
    ];

    servers
        .into_iter()
        .filter_map(|(url, description)| url.as_ref().map(|url| (url, description)))
        .fold(
            OpenApi::new("TurtleMan Customer Management API", "1.0"),
            |doc, (url, description)| doc.add_server(ApiServer::new(url).description(description)),
        )
}
