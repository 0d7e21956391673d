//! App Router

use salvo::Router;

use crate::{debug, products, profit, stock};

/// Domain routes. The `/debug` group is only mounted when enabled.
pub(crate) fn app_router(debug_routes_enabled: bool) -> Router {
    let router = Router::new()
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("inbound")
                .get(stock::inbound::index::handler)
                .post(stock::inbound::create::handler)
                .push(Router::with_path("add-quantity").post(stock::inbound::add_quantity::handler)),
        )
        .push(
            Router::with_path("outbound")
                .get(stock::outbound::index::handler)
                .post(stock::outbound::create::handler),
        )
        .push(
            Router::with_path("profit")
                .get(profit::report::handler)
                .push(Router::with_path("summary").get(profit::summary::handler)),
        );

    if debug_routes_enabled {
        router.push(debug_router())
    } else {
        router
    }
}

fn debug_router() -> Router {
    Router::with_path("debug")
        .push(Router::with_path("test-connection").get(debug::test_connection::handler))
        .push(Router::with_path("data").get(debug::data::handler))
        .push(
            Router::with_path("transaction/{kind}/{id}")
                .delete(debug::delete_transaction::handler),
        )
        .push(Router::with_path("delete-all").delete(debug::delete_all::handler))
}
