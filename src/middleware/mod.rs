mod cache;
mod minify;
mod security;

pub use cache::cache_control_middleware;
pub use minify::minify_html_middleware;
pub use security::security_headers_middleware;
