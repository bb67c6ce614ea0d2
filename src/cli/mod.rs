mod server;
mod submit;

pub use server::serve;
pub use submit::{SubmitArgs, submit};
