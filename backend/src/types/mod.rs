mod environment;
mod error;
mod extractors;
mod request;

pub use environment::Environment;
pub use error::AppError;
pub use extractors::{CoffeeBody, CoffeePath};
pub use request::CoffeeRequest;
