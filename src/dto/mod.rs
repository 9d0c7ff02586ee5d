mod responses;

pub use responses::{GreetingResponse, StatusResponse};
