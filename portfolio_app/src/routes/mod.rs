pub mod portfolio_routes;
