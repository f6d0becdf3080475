mod route_rate_limiter;

pub use route_rate_limiter::{RouteRateLimiter, rate_limit_middleware};
