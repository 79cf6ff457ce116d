mod favorites_routes_tests;
mod listings_page_tests;
